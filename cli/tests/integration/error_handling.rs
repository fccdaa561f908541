//! Error handling integration tests.
//!
//! Recoverable errors are reported and the batch goes on with exit code 0;
//! fatal errors stop the batch with exit code 1.

#[path = "../common/mod.rs"]
mod common;

use common::{TestFixture, copy_cmd, move_cmd};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_copy_onto_itself_same_path() {
    let fixture = TestFixture::new();
    let source = fixture.source_file("a.txt", "original");

    copy_cmd()
        .arg(&source)
        .arg(fixture.src.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot copy file to itself"));

    fixture.assert_file_content(&source, "original");
}

#[test]
fn test_copy_onto_itself_through_dot() {
    let fixture = TestFixture::new();
    let source = fixture.source_file("a.txt", "original");

    copy_cmd()
        .current_dir(fixture.src.path())
        .args(["a.txt", "."])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot copy file to itself"));

    fixture.assert_file_content(&source, "original");
}

#[test]
fn test_copy_missing_source_continues() {
    let fixture = TestFixture::new();
    let b = fixture.source_file("b.txt", "beta");

    copy_cmd()
        .arg(fixture.src.path().join("missing.txt"))
        .arg(&b)
        .arg(fixture.dst.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("b.txt successfully copied"))
        .stderr(predicate::str::contains("Cannot open or find source file"));

    assert_eq!(fixture.count_targets(), 1);
    fixture.assert_file_content(&fixture.target("b.txt"), "beta");
}

#[test]
fn test_copy_directory_source_is_fatal() {
    let fixture = TestFixture::new();
    let subdir = fixture.src.path().join("subdir");
    fs::create_dir(&subdir).unwrap();
    let b = fixture.source_file("b.txt", "beta");

    copy_cmd()
        .arg(&subdir)
        .arg(&b)
        .arg(fixture.dst.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("The source file must be a regular file"));

    assert_eq!(fixture.count_targets(), 0);
}

#[test]
fn test_copy_destination_is_regular_file_is_fatal() {
    let fixture = TestFixture::new();
    let source = fixture.source_file("a.txt", "alpha");
    let not_a_dir = fixture.existing_target("plain.txt", "plain");

    copy_cmd()
        .arg(&source)
        .arg(&not_a_dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "The destination must be a directory or a device",
        ));

    fixture.assert_file_content(&not_a_dir, "plain");
}

#[test]
fn test_copy_missing_destination_is_fatal() {
    let fixture = TestFixture::new();
    let source = fixture.source_file("a.txt", "alpha");

    copy_cmd()
        .arg(&source)
        .arg(fixture.dst.path().join("nowhere"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unable to read destination"));
}

#[test]
fn test_move_directory_source_is_fatal() {
    let fixture = TestFixture::new();
    let subdir = fixture.src.path().join("subdir");
    fs::create_dir(&subdir).unwrap();
    let b = fixture.source_file("b.txt", "beta");

    move_cmd()
        .arg(&subdir)
        .arg(&b)
        .arg(fixture.dst.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("The source file must be a regular file"));

    assert!(subdir.exists());
    assert!(b.exists());
    assert_eq!(fixture.count_targets(), 0);
}

#[test]
#[cfg(unix)]
fn test_move_device_destination_is_fatal() {
    let fixture = TestFixture::new();
    let source = fixture.source_file("a.txt", "alpha");

    move_cmd()
        .arg(&source)
        .arg("/dev/null")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("The destination must be a directory"));

    assert!(source.exists());
}

#[test]
fn test_move_target_exists_continues() {
    let fixture = TestFixture::new();
    let a = fixture.source_file("a.txt", "new");
    let b = fixture.source_file("b.txt", "beta");
    let existing = fixture.existing_target("a.txt", "old");

    move_cmd()
        .arg(&a)
        .arg(&b)
        .arg(fixture.dst.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("b.txt successfully moved"))
        .stderr(predicate::str::contains("Can't link"));

    fixture.assert_file_content(&a, "new");
    fixture.assert_file_content(&existing, "old");
    assert!(!b.exists());
    fixture.assert_file_content(&fixture.target("b.txt"), "beta");
}

#[test]
fn test_move_missing_source_continues() {
    let fixture = TestFixture::new();
    let b = fixture.source_file("b.txt", "beta");

    move_cmd()
        .arg(fixture.src.path().join("missing.txt"))
        .arg(&b)
        .arg(fixture.dst.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot inspect source file"));

    fixture.assert_file_content(&fixture.target("b.txt"), "beta");
}

#[test]
fn test_invalid_block_size_env() {
    let fixture = TestFixture::new();
    let source = fixture.source_file("a.txt", "alpha");

    copy_cmd()
        .env("CPMV_BLOCK_SIZE", "zero")
        .arg(&source)
        .arg(fixture.dst.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("CPMV_BLOCK_SIZE"));

    assert_eq!(fixture.count_targets(), 0);
}

#[test]
fn test_invalid_fallback_env() {
    let fixture = TestFixture::new();
    let source = fixture.source_file("a.txt", "alpha");

    move_cmd()
        .env("CPMV_CROSS_DEVICE_FALLBACK", "sometimes")
        .arg(&source)
        .arg(fixture.dst.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("CPMV_CROSS_DEVICE_FALLBACK"));

    assert!(source.exists());
}
