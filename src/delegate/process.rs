//! Delegates that run an external program.

use std::path::{Path, PathBuf};

use crate::error::{GenesisError, Result};
use crate::shell::{execute, CommandOptions};
use crate::ui::UserInterface;

use super::{Delegate, DelegateOutcome};

/// Runs a program with no arguments, sharing this process's stdio.
#[derive(Debug, Clone)]
pub struct ProcessDelegate {
    name: String,
    program: PathBuf,
    cwd: PathBuf,
}

impl ProcessDelegate {
    pub fn new(name: &str, program: impl Into<PathBuf>, cwd: &Path) -> Self {
        Self {
            name: name.to_string(),
            program: program.into(),
            cwd: cwd.to_path_buf(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Delegate for ProcessDelegate {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, _ui: &mut dyn UserInterface) -> Result<DelegateOutcome> {
        let options = CommandOptions {
            cwd: Some(self.cwd.clone()),
            ..Default::default()
        };

        tracing::debug!("Running {} for '{}'", self.program.display(), self.name);
        let result = execute(&self.program, &[] as &[&str], &options).map_err(|e| {
            GenesisError::DelegateSpawn {
                delegate: self.name.clone(),
                program: self.program.clone(),
                message: e.to_string(),
            }
        })?;

        tracing::debug!(
            "'{}' exited with {:?} after {:?}",
            self.name,
            result.exit_code,
            result.duration
        );

        if result.success {
            Ok(DelegateOutcome::Succeeded)
        } else {
            Ok(DelegateOutcome::Failed {
                code: result.exit_code,
            })
        }
    }
}
