//! Content digests for files and directory trees using SHA-256

use crate::error::HashError;
use crate::tree::path::RelativePath;
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Number of hex characters kept from the digest for filenames
pub const FINGERPRINT_LEN: usize = 8;

/// Delimiter written after every path and every file body in a directory digest
const FIELD_DELIMITER: &[u8] = &[0x00];

/// Read buffer size for streaming file content into the hasher
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Full 256-bit content digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding of the full digest
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short fingerprint embedded in renamed paths
    pub fn fingerprint(&self) -> Fingerprint {
        // 4 bytes encode to exactly FINGERPRINT_LEN hex characters
        Fingerprint(hex::encode(&self.0[..FINGERPRINT_LEN / 2]))
    }

    fn from_hasher(hasher: Sha256) -> Self {
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 8-character lowercase hex prefix of a [`Digest`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the digest of a byte slice
pub fn compute_hash(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Digest::from_hasher(hasher)
}

/// Compute the digest of a single file's raw bytes
///
/// Content is streamed through the hasher, so memory use does not grow with
/// file size.
pub fn digest_file(path: &Path) -> Result<Digest, HashError> {
    let mut hasher = Sha256::new();
    let size = feed_file(&mut hasher, path)?;
    let digest = Digest::from_hasher(hasher);
    debug!(path = %path.display(), size, digest = %digest, "Digested file");
    Ok(digest)
}

/// Compute the digest of a directory tree
///
/// For every entry, in the order given: the UTF-8 path bytes, `0x00`, the
/// file content, `0x00`. Callers pass the output of
/// [`crate::tree::walker::enumerate`], which is already in canonical order.
/// Zero entries yield the digest of the empty byte stream.
pub fn digest_directory(root: &Path, files: &[RelativePath]) -> Result<Digest, HashError> {
    let mut hasher = Sha256::new();
    let mut total = 0u64;

    for relative in files {
        hasher.update(relative.as_bytes());
        hasher.update(FIELD_DELIMITER);
        total += feed_file(&mut hasher, &relative.join_to(root))?;
        hasher.update(FIELD_DELIMITER);
        trace!(path = %relative, "Folded entry");
    }

    let digest = Digest::from_hasher(hasher);
    debug!(
        root = %root.display(),
        file_count = files.len(),
        total_bytes = total,
        digest = %digest,
        "Digested directory"
    );
    Ok(digest)
}

/// Stream a file's content into `hasher`, returning the number of bytes read
fn feed_file(hasher: &mut Sha256, path: &Path) -> Result<u64, HashError> {
    let file = File::open(path).map_err(|e| HashError::read(path, e))?;
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    io::copy(&mut reader, hasher).map_err(|e| HashError::read(path, e))
}
