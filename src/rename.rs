//! Rename policy: embed a fingerprint into a target's name in place

use crate::error::HashError;
use crate::target::{InputTarget, TargetKind};
use crate::tree::Fingerprint;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Separator placed between the base name and the fingerprint
pub const NAME_SEPARATOR: &str = ".";

/// Compute the destination path for `target` without touching the filesystem
///
/// Files become `<stem>.<fingerprint><.ext>`; directories become
/// `<name>.<fingerprint>`. The parent directory is unchanged.
pub fn renamed_path(target: &InputTarget, fingerprint: &Fingerprint) -> Result<PathBuf, HashError> {
    let path = target.path();
    let name = path.file_name().ok_or_else(|| {
        HashError::InvalidArgument(format!(
            "Cannot derive a name from {}",
            path.display()
        ))
    })?;

    let mut new_name = OsString::new();
    match target.kind() {
        TargetKind::File => {
            let stem = Path::new(name).file_stem().unwrap_or(name);
            new_name.push(stem);
            new_name.push(NAME_SEPARATOR);
            new_name.push(fingerprint.as_str());
            if let Some(ext) = Path::new(name).extension() {
                new_name.push(NAME_SEPARATOR);
                new_name.push(ext);
            }
        }
        TargetKind::Directory => {
            new_name.push(name);
            new_name.push(NAME_SEPARATOR);
            new_name.push(fingerprint.as_str());
        }
    }

    Ok(path.with_file_name(new_name))
}

/// Move `target` to its fingerprinted name with a single rename
///
/// An existing destination of any kind is reported as a conflict and left
/// untouched, as is the source.
///
/// The existence check and the rename are separate calls: a destination
/// created between them may be replaced on platforms where rename overwrites.
pub fn rename_target(target: &InputTarget, fingerprint: &Fingerprint) -> Result<PathBuf, HashError> {
    let from = target.path();
    let to = renamed_path(target, fingerprint)?;

    match std::fs::symlink_metadata(&to) {
        Ok(_) => {
            warn!(destination = %to.display(), "Rename destination already exists");
            return Err(HashError::RenameConflict(to));
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(HashError::RenameFailure {
                from: from.to_path_buf(),
                to,
                source: e,
            })
        }
    }

    debug!(from = %from.display(), to = %to.display(), "Renaming target");
    std::fs::rename(from, &to).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => HashError::RenameConflict(to.clone()),
        _ => HashError::RenameFailure {
            from: from.to_path_buf(),
            to: to.clone(),
            source: e,
        },
    })?;

    info!(from = %from.display(), to = %to.display(), "Renamed target");
    Ok(to)
}
