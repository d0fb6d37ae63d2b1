//! Integration tests for the end-to-end traversal-and-write operation

use seedfs::api::write_snapshot;
use seedfs::config::SnapshotConfig;
use seedfs::error::SnapshotError;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_snapshot_produces_parseable_document() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("fs");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("readme.txt"), "hello").unwrap();

    let output = temp_dir.path().join("seed.json");
    let config = SnapshotConfig {
        root: root.clone(),
        output: output.clone(),
    };

    let report = write_snapshot(&config).unwrap();

    assert_eq!(report.files, 1);
    assert_eq!(report.directories, 0);
    assert_eq!(report.output, output);

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(report.bytes_written, text.len());

    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, json!({ "$readme.txt": "hello" }));
}

#[test]
fn test_write_snapshot_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("fs");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "new").unwrap();

    let output = temp_dir.path().join("seed.json");
    fs::write(&output, "stale contents from a previous run").unwrap();

    let config = SnapshotConfig {
        root,
        output: output.clone(),
    };
    write_snapshot(&config).unwrap();

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(parsed, json!({ "$a.txt": "new" }));
}

#[test]
fn test_missing_root_fails_before_touching_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("seed.json");
    fs::write(&output, "previous output").unwrap();

    let config = SnapshotConfig {
        root: temp_dir.path().join("no-such-dir"),
        output: output.clone(),
    };

    let err = write_snapshot(&config).unwrap_err();
    assert!(matches!(err, SnapshotError::RootNotFound(_)));

    // The earlier output file is left exactly as it was
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous output");
}

#[test]
fn test_file_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    let not_a_dir = temp_dir.path().join("plain.txt");
    fs::write(&not_a_dir, "file").unwrap();

    let config = SnapshotConfig {
        root: not_a_dir,
        output: temp_dir.path().join("seed.json"),
    };

    let err = write_snapshot(&config).unwrap_err();
    assert!(matches!(err, SnapshotError::NotADirectory(_)));
}

#[test]
fn test_undecodable_file_aborts_and_preserves_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("fs");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("ok.txt"), "fine").unwrap();
    fs::write(root.join("raw.bin"), [0xc0, 0xff, 0xee]).unwrap();

    let output = temp_dir.path().join("seed.json");
    fs::write(&output, "previous output").unwrap();

    let config = SnapshotConfig {
        root,
        output: output.clone(),
    };

    let err = write_snapshot(&config).unwrap_err();
    assert!(matches!(err, SnapshotError::ReadFile { .. }));

    // Traversal failed, so the write never happened
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous output");
}

#[test]
fn test_missing_output_parent_is_write_failure() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("fs");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();

    let config = SnapshotConfig {
        root,
        output: temp_dir.path().join("missing-parent").join("seed.json"),
    };

    let err = write_snapshot(&config).unwrap_err();
    assert!(matches!(err, SnapshotError::WriteOutput { .. }));
}

#[test]
fn test_repeated_runs_produce_identical_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("fs");
    fs::create_dir_all(root.join("nested")).unwrap();
    fs::write(root.join("nested").join("f.txt"), "content").unwrap();
    fs::write(root.join("g.txt"), "more").unwrap();

    let output = temp_dir.path().join("seed.json");
    let config = SnapshotConfig {
        root,
        output: output.clone(),
    };

    write_snapshot(&config).unwrap();
    let first = fs::read_to_string(&output).unwrap();
    write_snapshot(&config).unwrap();
    let second = fs::read_to_string(&output).unwrap();

    assert_eq!(first, second);
}
