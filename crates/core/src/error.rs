//! Error types for railway's own fallible operations.
//!
//! The sum types never fail on their own; the only recoverable failures in
//! this crate come from loading a [`PanicConfig`](crate::config::PanicConfig).

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for railway operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Parsing errors
    #[error("failed to parse panic configuration: {reason}")]
    ConfigParseFailed { reason: String },

    // I/O errors
    #[error("failed to read configuration file '{}': {reason}", .path.display())]
    ConfigReadFailed { path: PathBuf, reason: String },

    // Environment errors
    #[error("invalid value '{value}' for environment variable {var}")]
    InvalidEnvValue { var: String, value: String },
}

impl Error {
    /// Create a configuration parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a configuration file read error.
    pub fn config_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid environment value error.
    pub fn invalid_env_value(var: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidEnvValue {
            var: var.into(),
            value: value.into(),
        }
    }
}

/// Result of loading or validating configuration.
pub type ConfigResult<T> = std::result::Result<T, Error>;
