//! Read-only queries against the project's git repository.

use std::path::{Path, PathBuf};

use crate::error::{GenesisError, Result};

use super::command::{execute, CommandOptions};

/// Format passed to `git log` by [`GitRepo::commits`].
const LOG_FORMAT: &str = "--format=%H|%an|%ae|%at|%s";

/// A single commit as reported by `git log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub hash: String,
    pub author: String,
    pub email: String,
    /// Author time, seconds since the epoch.
    pub timestamp: i64,
    pub message: String,
}

/// A git working tree rooted at a directory.
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `root` is inside a git repository.
    pub fn is_repository(&self) -> bool {
        self.run(&["rev-parse", "--git-dir"]).is_ok()
    }

    /// Number of commits reachable from any ref.
    pub fn commit_count(&self) -> Result<usize> {
        let args = ["rev-list", "--all", "--count"];
        let out = self.run(&args)?;
        out.trim().parse().map_err(|e| GenesisError::Git {
            command: args.join(" "),
            message: format!("unexpected output {:?}: {}", out.trim(), e),
        })
    }

    /// All commits reachable from any ref, newest first.
    pub fn commits(&self) -> Result<Vec<CommitRecord>> {
        let out = self.run(&["log", "--all", LOG_FORMAT])?;
        Ok(out.lines().filter_map(parse_log_line).collect())
    }

    /// Tracked files, optionally limited to a pathspec such as `*.md`.
    pub fn tracked_files(&self, pathspec: Option<&str>) -> Result<Vec<String>> {
        let mut args = vec!["ls-files"];
        if let Some(spec) = pathspec {
            args.push(spec);
        }
        let out = self.run(&args)?;
        Ok(out
            .lines()
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let options = CommandOptions {
            cwd: Some(self.root.clone()),
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };

        let command = args.join(" ");
        tracing::debug!("git {}", command);

        let result = execute("git", args, &options).map_err(|e| GenesisError::Git {
            command: command.clone(),
            message: e.to_string(),
        })?;

        if !result.success {
            return Err(GenesisError::Git {
                command,
                message: result.stderr.trim().to_string(),
            });
        }

        Ok(result.stdout)
    }
}

/// Parse one `%H|%an|%ae|%at|%s` line. Pipes inside the subject are kept.
pub fn parse_log_line(line: &str) -> Option<CommitRecord> {
    let mut parts = line.splitn(5, '|');
    let hash = parts.next()?;
    let author = parts.next()?;
    let email = parts.next()?;
    let timestamp = parts.next()?.trim().parse().ok()?;
    let message = parts.next()?;

    if hash.is_empty() {
        return None;
    }

    Some(CommitRecord {
        hash: hash.to_string(),
        author: author.to_string(),
        email: email.to_string(),
        timestamp,
        message: message.to_string(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;
    use std::process::Command;

    /// Whether a usable `git` binary is on PATH.
    pub fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Run git in `dir` with a fixed identity.
    pub fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args([
                "-c",
                "user.name=Test Author",
                "-c",
                "user.email=test@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap();
        assert!(status.status.success(), "git {:?} failed", args);
    }

    /// Initialize a repository with the given commit messages.
    pub fn init_repo(dir: &Path, messages: &[&str]) {
        git(dir, &["init", "-q"]);
        for message in messages {
            git(dir, &["commit", "-q", "--allow-empty", "-m", message]);
        }
    }
}
