//! Hasher Implementation Verification Tests
//!
//! Verifies that digests are plain SHA-256 over the documented byte layout.

use super::test_utils::{bundle, write_file};
use hashbrowns::tree::{digest_directory, digest_file, enumerate};
use sha2::{Digest, Sha256};
use tempfile::TempDir;

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// File digest matches SHA-256 computed directly
#[test]
fn test_file_digest_matches_sha256() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_file(temp_dir.path(), "doc.txt", "rename me");

    let digest = digest_file(&file).unwrap();
    assert_eq!(digest.to_hex(), sha256_hex(b"rename me"));
    assert_eq!(digest.fingerprint().as_str(), &sha256_hex(b"rename me")[..8]);
}

/// Directory digest is SHA-256 over path, NUL, content, NUL per sorted file
#[test]
fn test_directory_digest_layout() {
    let temp_dir = TempDir::new().unwrap();
    let dir = bundle(temp_dir.path(), "bundle");

    let files = enumerate(&dir).unwrap();
    let digest = digest_directory(&dir, &files).unwrap();

    let expected = sha256_hex(b"a.txt\0A\0nested/b.txt\0B\0");
    assert_eq!(digest.to_hex(), expected);
    assert_eq!(digest.fingerprint().as_str(), "96122064");
}

/// Binary content, including NUL bytes, is hashed verbatim
#[test]
fn test_binary_content_hashed_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let content = [0u8, 255, 0, 1, 2, 0];
    let file = write_file(temp_dir.path(), "blob.bin", content);

    assert_eq!(digest_file(&file).unwrap().to_hex(), sha256_hex(&content));
}

/// Two separately created files with the same bytes share a fingerprint
#[test]
fn test_identical_files_identical_fingerprint() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_file(temp_dir.path(), "one.txt", "same bytes");
    let second = write_file(temp_dir.path(), "other/two.dat", "same bytes");

    assert_eq!(
        digest_file(&first).unwrap().fingerprint(),
        digest_file(&second).unwrap().fingerprint()
    );
}

/// Empty file and empty directory both reduce to the empty-stream digest
#[test]
fn test_empty_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_file(temp_dir.path(), "empty.txt", "");
    let dir = temp_dir.path().join("empty_dir");
    std::fs::create_dir(&dir).unwrap();

    let empty = sha256_hex(b"");
    assert_eq!(digest_file(&file).unwrap().to_hex(), empty);
    assert_eq!(digest_directory(&dir, &enumerate(&dir).unwrap()).unwrap().to_hex(), empty);
}
