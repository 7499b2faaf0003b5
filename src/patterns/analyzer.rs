//! Recursive pattern detection over git history and tracked files.

use chrono::Utc;
use std::cell::OnceCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;

use crate::shell::{CommitRecord, GitRepo};

use super::report::{Pattern, PatternReport};

/// Number of keywords listed in the `message_patterns` pattern.
pub const TOP_KEYWORDS: usize = 5;

/// Words must be longer than this to count as keywords.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Files whose presence marks a genesis framework, besides the genesis document.
pub const FRAMEWORK_DOCS: [&str; 1] = ["GENESIS.md"];

/// Commit subject words ranked by frequency.
///
/// Words are lower-cased and split on whitespace. Ties keep the order in
/// which the words first appeared.
pub fn keyword_ranking(commits: &[CommitRecord]) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for commit in commits {
        for word in commit.message.to_lowercase().split_whitespace() {
            if word.chars().count() <= MIN_KEYWORD_LEN {
                continue;
            }
            let count = counts.entry(word.to_string()).or_insert(0);
            if *count == 0 {
                order.push(word.to_string());
            }
            *count += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|w| {
            let n = counts[&w];
            (w, n)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Patterns derived from one pass over the commit list.
pub fn commit_patterns(commits: &[CommitRecord], depth: usize) -> Vec<Pattern> {
    let mut patterns = Vec::new();

    if commits.len() > 1 {
        patterns.push(Pattern::new(
            "commit_frequency",
            format!("Repository has {} commits", commits.len()),
            depth,
            1.0,
        ));
    }

    let authors: HashSet<&str> = commits.iter().map(|c| c.author.as_str()).collect();
    if !authors.is_empty() {
        patterns.push(Pattern::new(
            "author_diversity",
            format!("{} unique author(s) detected", authors.len()),
            depth,
            1.0,
        ));
    }

    let ranking = keyword_ranking(commits);
    if !ranking.is_empty() {
        let top: Vec<&str> = ranking
            .iter()
            .take(TOP_KEYWORDS)
            .map(|(w, _)| w.as_str())
            .collect();
        patterns.push(Pattern::new(
            "message_patterns",
            format!("Top keywords: {}", top.join(", ")),
            depth,
            0.8,
        ));
    }

    patterns
}

/// Text after the last dot of the file name. Dotfiles count too, so
/// `.gitignore` yields `gitignore`.
fn file_extension(file: &str) -> Option<&str> {
    let name = file.rsplit_once('/').map_or(file, |(_, name)| name);
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

/// Patterns derived from the tracked file list.
pub fn file_patterns(files: &[String], depth: usize) -> Vec<Pattern> {
    let mut patterns = Vec::new();

    let mut extensions: BTreeMap<String, usize> = BTreeMap::new();
    for file in files {
        if let Some(ext) = file_extension(file) {
            *extensions.entry(ext.to_string()).or_insert(0) += 1;
        }
    }
    if !extensions.is_empty() {
        let listed: Vec<String> = extensions
            .iter()
            .map(|(ext, n)| format!("{} ({})", ext, n))
            .collect();
        patterns.push(Pattern::new(
            "file_types",
            format!("File types: {}", listed.join(", ")),
            depth,
            1.0,
        ));
    }

    let directories: HashSet<&str> = files
        .iter()
        .filter_map(|f| f.rsplit_once('/').map(|(dir, _)| dir))
        .collect();
    if !directories.is_empty() {
        patterns.push(Pattern::new(
            "directory_structure",
            format!("{} directories detected", directories.len()),
            depth,
            1.0,
        ));
    }

    patterns
}

/// Analyzes a repository for recurring patterns.
pub struct PatternAnalyzer {
    git: GitRepo,
    genesis_file: PathBuf,
    max_depth: usize,
    commits: OnceCell<Result<Vec<CommitRecord>, String>>,
}

impl PatternAnalyzer {
    pub fn new(git: GitRepo, genesis_file: impl Into<PathBuf>, max_depth: usize) -> Self {
        Self {
            git,
            genesis_file: genesis_file.into(),
            max_depth,
            commits: OnceCell::new(),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The commit list, read from git once per analyzer.
    fn commits(&self) -> &Result<Vec<CommitRecord>, String> {
        self.commits
            .get_or_init(|| self.git.commits().map_err(|e| e.to_string()))
    }

    /// Commit patterns at `depth` and, recursively, every deeper level up
    /// to the maximum depth.
    pub fn analyze_commits(&self, depth: usize, warnings: &mut Vec<String>) -> Vec<Pattern> {
        if depth >= self.max_depth {
            return Vec::new();
        }

        let commits = match self.commits() {
            Ok(commits) => commits,
            Err(e) => {
                warnings.push(format!("Error analyzing commit patterns: {}", e));
                return Vec::new();
            }
        };

        let mut patterns = commit_patterns(commits, depth);
        if depth + 1 < self.max_depth {
            patterns.extend(self.analyze_commits(depth + 1, warnings));
        }
        patterns
    }

    pub fn analyze_files(&self, warnings: &mut Vec<String>) -> Vec<Pattern> {
        if self.max_depth == 0 {
            return Vec::new();
        }
        match self.git.tracked_files(None) {
            Ok(files) => file_patterns(&files, 0),
            Err(e) => {
                warnings.push(format!("Error analyzing file patterns: {}", e));
                Vec::new()
            }
        }
    }

    /// Documentation and framework-file presence.
    pub fn analyze_framework(&self, warnings: &mut Vec<String>) -> Vec<Pattern> {
        let docs = match self.git.tracked_files(Some("*.md")) {
            Ok(docs) => docs,
            Err(e) => {
                warnings.push(format!("Error analyzing ethical patterns: {}", e));
                return Vec::new();
            }
        };

        let mut patterns = Vec::new();
        if !docs.is_empty() {
            patterns.push(Pattern::new(
                "ethical_documentation",
                format!("Documentation files present: {}", docs.len()),
                0,
                0.9,
            ));
        }

        let root = self.git.root();
        let candidates = std::iter::once(self.genesis_file.clone())
            .chain(FRAMEWORK_DOCS.iter().map(|d| root.join(d)));
        for path in candidates {
            if path.is_file() {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                patterns.push(Pattern::new(
                    "ethical_framework",
                    format!("Genesis framework file found: {}", name),
                    0,
                    1.0,
                ));
            }
        }

        patterns
    }

    /// Run every analysis, calling `on_phase` before each one.
    pub fn analyze_with(&self, mut on_phase: impl FnMut(&str)) -> PatternReport {
        let mut warnings = Vec::new();
        let mut patterns = Vec::new();

        on_phase("Analyzing commit patterns...");
        patterns.extend(self.analyze_commits(0, &mut warnings));

        on_phase("Analyzing file patterns...");
        patterns.extend(self.analyze_files(&mut warnings));

        on_phase("Analyzing ethical patterns...");
        patterns.extend(self.analyze_framework(&mut warnings));

        tracing::debug!("Detected {} patterns", patterns.len());

        PatternReport {
            generated_at: Utc::now(),
            max_depth: self.max_depth,
            patterns,
            warnings,
        }
    }

    pub fn analyze(&self) -> PatternReport {
        self.analyze_with(|_| {})
    }
}
