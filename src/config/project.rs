//! Configuration resolved against a project root.

use std::path::{Path, PathBuf};

use crate::shell::GitRepo;

use super::schema::GenesisConfig;

/// Absolute locations and settings the built-in tools work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub genesis_file: PathBuf,
    pub state_file: PathBuf,
    pub max_depth: usize,
}

impl ProjectContext {
    pub fn new(root: &Path, config: &GenesisConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            genesis_file: config.genesis_path(root),
            state_file: config.state_path(root),
            max_depth: config.max_depth,
        }
    }

    /// The repository at the project root.
    pub fn git(&self) -> GitRepo {
        GitRepo::new(&self.root)
    }
}
