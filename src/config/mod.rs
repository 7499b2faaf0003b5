//! Configuration loading and parsing for Genesis.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Paths resolved against the project root in [`project`]
//!
//! # Example
//!
//! ```
//! use genesis::config::{load_config, DelegateSpec};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.delegates.validate, DelegateSpec::Builtin);
//! ```

pub mod loader;
pub mod project;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use project::ProjectContext;
pub use schema::{DelegateSpec, DelegatesConfig, GenesisConfig, DEFAULT_MAX_DEPTH};
