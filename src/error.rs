//! Error types for cookbook operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for cookbook operations.
pub type MicooResult<T> = Result<T, MicooError>;

/// Errors that can occur while resolving, reading or writing cookbooks.
#[derive(Debug, Error)]
pub enum MicooError {
    /// No cookbook file backs the requested name.
    #[error("Cookbook '{name}' not found in the repository ({})", .path.display())]
    CookbookNotFound { name: String, path: PathBuf },

    /// Name is empty or would escape the repository directory.
    #[error("Invalid cookbook name: '{0}'")]
    InvalidCookbookName(String),

    /// Destination already exists and overwriting was not requested.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),

    /// Configuration could not be used as loaded.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// IO error tied to a specific path.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MicooError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
