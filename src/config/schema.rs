//! Configuration schema definitions for Genesis.
//!
//! This module contains the struct definitions that map to the
//! `genesis.yml` configuration file format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default recursive depth for pattern analysis.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Root configuration structure for genesis.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisConfig {
    /// Genesis document, relative to the project root
    pub genesis_file: PathBuf,

    /// State document, relative to the project root
    pub state_file: PathBuf,

    /// Maximum recursion depth for commit pattern analysis
    pub max_depth: usize,

    /// Which delegate handles each action
    pub delegates: DelegatesConfig,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            genesis_file: PathBuf::from("genesis.json"),
            state_file: PathBuf::from("state.json"),
            max_depth: DEFAULT_MAX_DEPTH,
            delegates: DelegatesConfig::default(),
        }
    }
}

impl GenesisConfig {
    /// Absolute location of the genesis document.
    pub fn genesis_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.genesis_file)
    }

    /// Absolute location of the state document.
    pub fn state_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.state_file)
    }
}

/// Delegate selection for the four delegating actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegatesConfig {
    pub validate: DelegateSpec,
    pub state: DelegateSpec,
    pub analyze: DelegateSpec,
    pub test: DelegateSpec,
}

/// How a single action is carried out.
///
/// ```yaml
/// validate: { kind: builtin }
/// state: { kind: process, program: ./state_tracker.py }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DelegateSpec {
    /// Run the tool compiled into this binary.
    #[default]
    Builtin,

    /// Run an external program with no arguments.
    Process {
        /// Program path; relative paths resolve against the project root
        program: PathBuf,
    },
}

impl DelegateSpec {
    /// Resolve a relative program path against `project_root`.
    pub fn resolve(&self, project_root: &Path) -> Self {
        match self {
            Self::Builtin => Self::Builtin,
            // Bare names like `validate-genesis` are left for PATH lookup.
            Self::Process { program }
                if program.is_relative() && program.components().count() > 1 =>
            {
                Self::Process {
                    program: project_root.join(program),
                }
            }
            Self::Process { program } => Self::Process {
                program: program.clone(),
            },
        }
    }
}
