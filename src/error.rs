//! Error types for Genesis operations.
//!
//! This module defines [`GenesisError`], the error type shared by the
//! dispatcher, the configuration layer and the built-in tools, and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GenesisError` for failures the binary reports to the user
//! - Use `anyhow::Error` (via `GenesisError::Other`) for unexpected errors
//! - Delegate exit codes are never turned into errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Genesis operations.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A delegate program could not be started.
    #[error("Failed to start delegate '{delegate}' ({program}): {message}")]
    DelegateSpawn {
        delegate: String,
        program: PathBuf,
        message: String,
    },

    /// A data file (genesis.json, state.json) is not valid JSON.
    #[error("Failed to parse {path}: {message}")]
    DataFileParse { path: PathBuf, message: String },

    /// A git command failed.
    #[error("git {command} failed: {message}")]
    Git { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Genesis operations.
pub type Result<T> = std::result::Result<T, GenesisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = GenesisError::ConfigNotFound {
            path: PathBuf::from("/foo/genesis.yml"),
        };
        assert!(err.to_string().contains("/foo/genesis.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GenesisError::ConfigParseError {
            path: PathBuf::from("/genesis.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/genesis.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn delegate_spawn_displays_delegate_and_program() {
        let err = GenesisError::DelegateSpawn {
            delegate: "validate".into(),
            program: PathBuf::from("./validate_genesis.py"),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("validate"));
        assert!(msg.contains("./validate_genesis.py"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn git_error_displays_command() {
        let err = GenesisError::Git {
            command: "rev-list --all --count".into(),
            message: "not a git repository".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("git rev-list"));
        assert!(msg.contains("not a git repository"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GenesisError = io_err.into();
        assert!(matches!(err, GenesisError::Io(_)));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GenesisError = json_err.into();
        assert!(matches!(err, GenesisError::Json(_)));
    }
}
