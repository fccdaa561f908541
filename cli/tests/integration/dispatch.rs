//! The program name picks the operation.
//!
//! These tests invoke the built binary through symlinks with other names,
//! since the name it was started under is all that selects copy or move.

#![cfg(unix)]

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::prelude::*;
use common::TestFixture;
use predicates::prelude::*;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Link the `copy` binary into `dir` under `name`.
fn link_as(dir: &Path, name: &str) -> PathBuf {
    let link = dir.join(name);
    symlink(env!("CARGO_BIN_EXE_copy"), &link).unwrap();
    link
}

#[test]
fn test_unknown_name_does_nothing() {
    let bin = TempDir::new().unwrap();
    let fixture = TestFixture::new();
    let source = fixture.source_file("a.txt", "alpha");

    Command::new(link_as(bin.path(), "transfer"))
        .arg(&source)
        .arg(fixture.dst.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert!(source.exists());
    assert_eq!(fixture.count_targets(), 0);
}

#[test]
fn test_unknown_name_ignores_bad_arguments() {
    let bin = TempDir::new().unwrap();

    Command::new(link_as(bin.path(), "copy2"))
        .arg("--no-such-flag")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_copy_binary_named_move_moves() {
    let bin = TempDir::new().unwrap();
    let fixture = TestFixture::new();
    let source = fixture.source_file("a.txt", "alpha");

    Command::new(link_as(bin.path(), "move"))
        .arg(&source)
        .arg(fixture.dst.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully moved to"));

    assert!(!source.exists());
    fixture.assert_file_content(&fixture.target("a.txt"), "alpha");
}

#[test]
fn test_move_binary_named_copy_copies() {
    let bin = TempDir::new().unwrap();
    let fixture = TestFixture::new();
    let source = fixture.source_file("a.txt", "alpha");
    let link = bin.path().join("copy");
    symlink(env!("CARGO_BIN_EXE_move"), &link).unwrap();

    Command::new(&link)
        .arg(&source)
        .arg(fixture.dst.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully copied to"));

    assert!(source.exists());
    fixture.assert_file_content(&fixture.target("a.txt"), "alpha");
}
