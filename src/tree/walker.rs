//! Filesystem walker enumerating the regular files beneath a directory root

use crate::error::HashError;
use crate::tree::path::{self, RelativePath};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Walker over a single directory root
///
/// Symbolic links are never followed and, like devices, sockets and fifos,
/// are left out of the result. Only regular files are reported.
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the tree and collect every regular file as a root-relative path
    ///
    /// Returned paths are sorted byte-wise, so the order does not depend on
    /// the order in which the filesystem lists directory entries.
    pub fn walk(&self) -> Result<Vec<RelativePath>, HashError> {
        let mut files = Vec::new();

        // walkdir descends with an explicit stack of open directories, so deep
        // trees do not grow the call stack.
        let walker = WalkDir::new(&self.root).follow_links(false).min_depth(1);

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                HashError::read(path, e.into())
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = RelativePath::from_root(&self.root, entry.path())?;
            trace!(path = %relative, "Collected file");
            files.push(relative);
        }

        files.sort_by(path::compare);
        debug!(root = %self.root.display(), file_count = files.len(), "Enumerated tree");

        Ok(files)
    }
}

/// Enumerate all regular files under `root` in canonical order
pub fn enumerate(root: &Path) -> Result<Vec<RelativePath>, HashError> {
    Walker::new(root).walk()
}
