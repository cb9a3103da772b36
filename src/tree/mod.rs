//! Content Tree
//!
//! Enumerates a directory tree in canonical order and reduces a file or a
//! whole tree to one deterministic SHA-256 digest.

pub mod hasher;
pub mod path;
pub mod walker;

pub use hasher::{digest_directory, digest_file, Digest, Fingerprint, FINGERPRINT_LEN};
pub use path::RelativePath;
pub use walker::{enumerate, Walker};
