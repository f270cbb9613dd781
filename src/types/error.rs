//! Error types for the installer

use std::path::PathBuf;
use thiserror::Error;

/// Error types for installer operations
#[derive(Debug, Error)]
pub enum InstallerError {
    /// Source or target directory missing, or the user profile cannot be located
    #[error("Environment error: {0}")]
    Environment(String),

    /// Invalid configuration (options or config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error (manifest contents)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Write failure for a specific destination
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest or file fetch failure
    #[error("Network error: {url}: {message}")]
    Network { url: String, message: String },
}

impl InstallerError {
    /// Check if this error came from fetching remote content
    pub fn is_network_error(&self) -> bool {
        matches!(self, InstallerError::Network { .. })
    }

    /// Check if this error is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            InstallerError::Validation(_) | InstallerError::Config(_)
        )
    }

    /// Process exit status for this error; never 0
    pub fn exit_code(&self) -> i32 {
        match self {
            InstallerError::Config(_) | InstallerError::Validation(_) => 2,
            _ => 1,
        }
    }
}
