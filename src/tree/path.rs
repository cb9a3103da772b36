//! Root-relative path normalization for deterministic hashing

use crate::error::HashError;
use std::cmp::Ordering;
use std::fmt;
use std::path::{Component, Path};

/// Separator used in every relative path, whatever the host platform uses
pub const SEPARATOR: char = '/';

/// A file location relative to a directory root, always `/`-separated UTF-8
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    /// Build a relative path from `path` located under `root`
    ///
    /// Fails if `path` is not under `root` or any component is not valid UTF-8,
    /// since the digest is defined over the UTF-8 bytes of the path.
    pub fn from_root(root: &Path, path: &Path) -> Result<Self, HashError> {
        let relative = path.strip_prefix(root).map_err(|_| {
            HashError::InvalidArgument(format!(
                "{} is not located under {}",
                path.display(),
                root.display()
            ))
        })?;
        Self::from_components(relative)
    }

    fn from_components(relative: &Path) -> Result<Self, HashError> {
        let mut out = String::new();
        for component in relative.components() {
            let Component::Normal(name) = component else {
                continue;
            };
            let name = name.to_str().ok_or_else(|| {
                HashError::InvalidArgument(format!(
                    "Path is not valid UTF-8: {}",
                    relative.display()
                ))
            })?;
            if !out.is_empty() {
                out.push(SEPARATOR);
            }
            out.push_str(name);
        }
        Ok(Self(out))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Resolve back to a filesystem path under `root`
    pub fn join_to(&self, root: &Path) -> std::path::PathBuf {
        self.0.split(SEPARATOR).fold(root.to_path_buf(), |acc, part| acc.join(part))
    }
}

/// Byte-wise ordering of the UTF-8 string, independent of locale and platform
pub fn compare(a: &RelativePath, b: &RelativePath) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

impl Ord for RelativePath {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for RelativePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
