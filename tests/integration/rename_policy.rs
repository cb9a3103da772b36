//! Integration tests for renaming targets to their fingerprinted names

use super::test_utils::{bundle, list_names, write_file};
use hashbrowns::api::{HashService, Mode};
use hashbrowns::error::HashErrorKind;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_rename_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_file(temp_dir.path(), "doc.txt", "rename me");

    let outcome = HashService::new().run(&file, Mode::Rename).unwrap();

    let expected = temp_dir.path().join("doc.2cf8fe5f.txt");
    assert_eq!(outcome.fingerprint, "2cf8fe5f");
    assert_eq!(outcome.renamed_to.as_deref(), Some(expected.as_path()));
    assert_eq!(list_names(temp_dir.path()), vec!["doc.2cf8fe5f.txt"]);
    assert_eq!(fs::read_to_string(expected).unwrap(), "rename me");
}

#[test]
fn test_rename_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dir = bundle(temp_dir.path(), "bundle");

    HashService::new().run(&dir, Mode::Rename).unwrap();

    assert_eq!(list_names(temp_dir.path()), vec!["bundle.96122064"]);
    let renamed = temp_dir.path().join("bundle.96122064");
    assert_eq!(list_names(&renamed), vec!["a.txt", "nested"]);
}

#[test]
fn test_renamed_directory_keeps_fingerprint() {
    let temp_dir = TempDir::new().unwrap();
    let dir = bundle(temp_dir.path(), "bundle");

    let outcome = HashService::new().run(&dir, Mode::Rename).unwrap();
    let renamed = outcome.renamed_to.unwrap();

    // Content is unchanged, so hashing the renamed directory reproduces the tag
    let again = HashService::new().fingerprint(&renamed).unwrap();
    assert_eq!(again.as_str(), outcome.fingerprint);
}

#[test]
fn test_conflict_leaves_filesystem_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_file(temp_dir.path(), "doc.txt", "rename me");
    let existing = write_file(temp_dir.path(), "doc.2cf8fe5f.txt", "occupied");

    let err = HashService::new().run(&file, Mode::Rename).unwrap_err();

    assert_eq!(err.kind(), HashErrorKind::RenameConflict);
    assert_eq!(fs::read_to_string(&file).unwrap(), "rename me");
    assert_eq!(fs::read_to_string(&existing).unwrap(), "occupied");
}

#[test]
fn test_directory_conflict_with_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = bundle(temp_dir.path(), "bundle");
    write_file(temp_dir.path(), "bundle.96122064", "not a directory");

    let err = HashService::new().run(&dir, Mode::Rename).unwrap_err();

    assert_eq!(err.kind(), HashErrorKind::RenameConflict);
    assert!(dir.join("nested").join("b.txt").is_file());
}

#[test]
fn test_missing_path_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let err = HashService::new()
        .run(&temp_dir.path().join("nope.txt"), Mode::Rename)
        .unwrap_err();
    assert_eq!(err.kind(), HashErrorKind::NotFound);
    assert!(list_names(temp_dir.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_read_failure() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("bundle");
    let locked = write_file(&dir, "locked.txt", "secret");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read the file anyway; nothing to assert then
    if fs::read(&locked).is_ok() {
        return;
    }

    let err = HashService::new().run(&dir, Mode::Rename).unwrap_err();
    assert_eq!(err.kind(), HashErrorKind::ReadFailure);
    assert!(dir.is_dir());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
}
