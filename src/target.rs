//! Input target resolution: a path and whether it is a file or a directory

use crate::error::HashError;
use crate::tree::{hasher, walker, Digest};
use serde::Serialize;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Kind of filesystem entry an input path resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    File,
    Directory,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::File => f.write_str("file"),
            TargetKind::Directory => f.write_str("directory"),
        }
    }
}

/// A path resolved once at the start of an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTarget {
    path: PathBuf,
    kind: TargetKind,
}

impl InputTarget {
    /// Stat `path` and classify it
    ///
    /// Anything other than a regular file or a directory is rejected.
    pub fn resolve(path: impl Into<PathBuf>) -> Result<Self, HashError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(HashError::InvalidArgument("Path must not be empty".to_string()));
        }

        let metadata = std::fs::metadata(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => HashError::NotFound(path.clone()),
            ErrorKind::NotADirectory => HashError::InvalidArgument(format!(
                "{} is not a directory",
                path.display()
            )),
            _ => HashError::read(&path, e),
        })?;

        let kind = if metadata.is_file() {
            TargetKind::File
        } else if metadata.is_dir() {
            TargetKind::Directory
        } else {
            return Err(HashError::InvalidArgument(format!(
                "{} is neither a regular file nor a directory",
                path.display()
            )));
        };

        debug!(path = %path.display(), kind = %kind, "Resolved input target");
        Ok(Self { path, kind })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// Compute the content digest of this target
    #[instrument(skip(self), fields(path = %self.path.display(), kind = %self.kind))]
    pub fn digest(&self) -> Result<Digest, HashError> {
        match self.kind {
            TargetKind::File => hasher::digest_file(&self.path),
            TargetKind::Directory => {
                let files = walker::enumerate(&self.path)?;
                hasher::digest_directory(&self.path, &files)
            }
        }
    }
}
