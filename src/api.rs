//! Core Fingerprint API
//!
//! Stateless entry point used by the CLI: resolve a target, digest it and
//! either report the fingerprint or rename the target to embed it.

use crate::error::HashError;
use crate::rename;
use crate::target::{InputTarget, TargetKind};
use crate::tree::{Digest, Fingerprint};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument};

/// What to do with a computed fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report the fingerprint only; supported for files
    HashOnly,
    /// Rename the target to embed the fingerprint
    Rename,
}

/// Result of a completed operation
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Path as given by the caller
    pub path: PathBuf,
    pub kind: TargetKind,
    /// 8-character fingerprint
    pub fingerprint: String,
    /// Full hex digest
    pub digest: String,
    /// New location, set only in rename mode
    pub renamed_to: Option<PathBuf>,
}

impl Outcome {
    fn new(target: &InputTarget, digest: &Digest, renamed_to: Option<PathBuf>) -> Self {
        Self {
            path: target.path().to_path_buf(),
            kind: target.kind(),
            fingerprint: digest.fingerprint().to_string(),
            digest: digest.to_hex(),
            renamed_to,
        }
    }
}

/// Fingerprint service
///
/// Holds no state; every call resolves, reads and hashes from scratch.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashService;

impl HashService {
    pub fn new() -> Self {
        Self
    }

    /// Run one operation on `path`
    ///
    /// Hash-only mode on a directory is rejected before any content is read.
    /// On failure the filesystem is left as it was.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn run(&self, path: &Path, mode: Mode) -> Result<Outcome, HashError> {
        let start = Instant::now();
        let target = InputTarget::resolve(path)?;

        if mode == Mode::HashOnly && target.kind() == TargetKind::Directory {
            return Err(HashError::InvalidArgument(
                "Hash-only mode only supports files, not folders.".to_string(),
            ));
        }

        let digest = target.digest()?;
        let renamed_to = match mode {
            Mode::HashOnly => None,
            Mode::Rename => Some(rename::rename_target(&target, &digest.fingerprint())?),
        };

        info!(
            fingerprint = %digest.fingerprint(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Operation completed"
        );
        Ok(Outcome::new(&target, &digest, renamed_to))
    }

    /// Fingerprint of a file or directory, without renaming anything
    pub fn fingerprint(&self, path: &Path) -> Result<Fingerprint, HashError> {
        Ok(InputTarget::resolve(path)?.digest()?.fingerprint())
    }
}
