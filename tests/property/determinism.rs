//! Property-based tests for determinism guarantees

use hashbrowns::target::InputTarget;
use hashbrowns::tree::{enumerate, hasher, FINGERPRINT_LEN};
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Relative file paths up to two levels deep, with lowercase, uppercase and digit names
fn tree_strategy() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    btree_map("[a-zA-Z0-9_]{1,6}(/[a-zA-Z0-9_]{1,6})?", vec(any::<u8>(), 0..64), 0..8)
        .prop_filter("no path may be both a file and a directory", |files| {
            files.keys().all(|path| {
                let prefix = format!("{}/", path);
                !files.keys().any(|other| other.starts_with(&prefix))
            })
        })
}

fn materialize<'a>(root: &Path, files: impl Iterator<Item = (&'a String, &'a Vec<u8>)>) {
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Fingerprint is always the 8-character prefix of the full hex digest
#[test]
fn test_fingerprint_prefix_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<Vec<u8>>(), |content| {
            let digest = hasher::compute_hash(&content);
            let fingerprint = digest.fingerprint();

            prop_assert_eq!(fingerprint.as_str().len(), FINGERPRINT_LEN);
            prop_assert_eq!(fingerprint.as_str(), &digest.to_hex()[..FINGERPRINT_LEN]);
            prop_assert_eq!(hasher::compute_hash(&content), digest);

            Ok(())
        })
        .unwrap();
}

/// Directory fingerprint does not depend on the order files were created in
#[test]
fn test_creation_order_property() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(32));

    runner
        .run(&tree_strategy(), |files| {
            let forward = TempDir::new().unwrap();
            materialize(forward.path(), files.iter());

            let backward = TempDir::new().unwrap();
            materialize(backward.path(), files.iter().rev());

            let d1 = InputTarget::resolve(forward.path()).unwrap().digest().unwrap();
            let d2 = InputTarget::resolve(backward.path()).unwrap().digest().unwrap();
            prop_assert_eq!(d1, d2);

            Ok(())
        })
        .unwrap();
}

/// Enumeration is sorted byte-wise and lists exactly the files written
#[test]
fn test_enumeration_order_property() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(32));

    runner
        .run(&tree_strategy(), |files| {
            let temp_dir = TempDir::new().unwrap();
            materialize(temp_dir.path(), files.iter());

            let listed: Vec<String> = enumerate(temp_dir.path())
                .unwrap()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect();

            // BTreeMap<String, _> iterates in byte-wise order of the keys
            let expected: Vec<String> = files.keys().cloned().collect();
            prop_assert_eq!(listed, expected);

            Ok(())
        })
        .unwrap();
}
