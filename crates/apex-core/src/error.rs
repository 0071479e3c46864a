//! Error types for the ambient edges of the pursuit model.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be a finite number >= 0 (got {value})")]
    NotNonNegative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number > 0 (got {value})")]
    NotPositive { field: &'static str, value: f64 },
}
