//! Error types for generation and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating output or loading configuration.
#[derive(Debug, Error)]
pub enum GenError {
    /// File or stream I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A configuration file that does not describe a valid configuration.
    #[error("invalid config {}: {source}", path.display())]
    ConfigError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Convenience alias for results with [`GenError`].
pub type Result<T> = std::result::Result<T, GenError>;
