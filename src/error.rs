//! Error types for content fingerprinting and renaming.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving, digesting or renaming a target
#[derive(Debug, Error)]
pub enum HashError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot rename to {}: destination already exists", .0.display())]
    RenameConflict(PathBuf),

    #[error("Failed to rename {} to {}: {source}", from.display(), to.display())]
    RenameFailure {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Stable category of a [`HashError`], independent of its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashErrorKind {
    InvalidArgument,
    NotFound,
    ReadFailure,
    RenameConflict,
    RenameFailure,
}

impl HashError {
    pub fn kind(&self) -> HashErrorKind {
        match self {
            HashError::InvalidArgument(_) => HashErrorKind::InvalidArgument,
            HashError::NotFound(_) => HashErrorKind::NotFound,
            HashError::ReadFailure { .. } => HashErrorKind::ReadFailure,
            HashError::RenameConflict(_) => HashErrorKind::RenameConflict,
            HashError::RenameFailure { .. } => HashErrorKind::RenameFailure,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HashError::ReadFailure {
            path: path.into(),
            source,
        }
    }
}

/// Configuration and logging setup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Invalid(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
