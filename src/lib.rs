//! Hashbrowns: Content-Addressed Renaming
//!
//! Computes a deterministic SHA-256 digest of a file, or of a directory tree's
//! paths and contents, and renames the target to embed an 8-character hex
//! fingerprint of that digest.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod rename;
pub mod target;
pub mod tree;
