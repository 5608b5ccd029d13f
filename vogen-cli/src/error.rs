//! Error types for the CLI.
//!
//! This module defines all error types used throughout the CLI,
//! providing detailed error messages with context for debugging.

use std::path::PathBuf;
use thiserror::Error;
use vogen::VogenError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error loading the definition file.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error from the generator.
    #[error("Failed to generate value objects: {0}")]
    Generate(#[from] VogenError),

    /// Validation failed (generated file out of date).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid TOML syntax or shape.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a not found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Stale output exits with 2 so scripts can tell it apart from failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Validation("stale".to_string()).exit_code(), 2);
        assert_eq!(CliError::Generate(VogenError::InvalidFilePath).exit_code(), 1);
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::invalid_value("format.command", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'format.command': must not be empty"
        );

        let err = ConfigError::not_found(PathBuf::from("vogen.toml"));
        assert!(err.to_string().contains("vogen.toml"));
    }
}
