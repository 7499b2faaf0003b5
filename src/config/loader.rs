//! Configuration file discovery and loading.

use crate::config::schema::GenesisConfig;
use crate::error::{GenesisError, Result};
use std::fs;
use std::path::Path;

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "genesis.yml";

/// Load a single config file and parse it into GenesisConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GenesisConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GenesisError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GenesisError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into GenesisConfig.
///
/// An empty document yields the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<GenesisConfig> {
    if content.trim().is_empty() {
        return Ok(GenesisConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GenesisError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise
/// `genesis.yml` in the project root is used when present, and the
/// default configuration when it is not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<GenesisConfig> {
    if let Some(override_path) = config_override {
        tracing::debug!("Loading config from {}", override_path.display());
        return load_config_file(override_path);
    }

    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        tracing::debug!("Loading config from {}", path.display());
        load_config_file(&path)
    } else {
        tracing::debug!("No {} found, using built-in delegates", CONFIG_FILE_NAME);
        Ok(GenesisConfig::default())
    }
}
