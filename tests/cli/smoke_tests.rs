// tests/cli/smoke_tests.rs
use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::{cl, generated_file, write_file};

#[test]
fn shows_help() {
    cl().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Count the number of lines in a file"));
}

#[test]
fn counts_generated_file() {
    let dir = TempDir::new().unwrap();
    let (path, stats) = generated_file(dir.path(), 1024 * 1024);

    cl().arg(&path)
        .assert()
        .success()
        .stdout(format!("{}\n", stats.lines))
        .stderr("");
}

#[test]
fn every_strategy_agrees() {
    let dir = TempDir::new().unwrap();
    let (path, stats) = generated_file(dir.path(), 300 * 1024);

    for strategy in [
        "chunked",
        "small-chunks",
        "scoped-threads",
        "streaming",
        "sequential",
        "line-reader",
        "buffered-scan",
    ] {
        cl().args(["--strategy", strategy])
            .arg(&path)
            .assert()
            .success()
            .stdout(format!("{}\n", stats.lines))
            .stderr("");
    }
}

#[test]
fn counts_trailing_fragment() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "fragment.txt", b"\n\nHello");

    cl().arg(&path).assert().success().stdout("3\n");
}

#[test]
fn empty_file_is_zero() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.txt", b"");

    cl().arg(&path).assert().success().stdout("0\n");
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "two.txt", b"a\nb\n");

    let output = cl().args(["--format", "json"]).arg(&path).assert().success();
    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(json["lines"], 2);
    assert_eq!(json["strategy"], "chunked");
}

#[test]
fn missing_argument_exits_with_one() {
    cl().assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Count the number of lines in a file"))
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn too_many_arguments_exit_with_one() {
    cl().args(["a.txt", "b.txt"]).assert().code(1).stderr(predicate::str::contains("error:"));
}

#[test]
fn missing_file_exits_with_one() {
    let dir = TempDir::new().unwrap();

    cl().arg(dir.path().join("nope.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("error: failed to open"));
}

#[test]
fn directory_fails_to_count() {
    let dir = TempDir::new().unwrap();

    // opening a directory succeeds on unix; the first read fails
    cl().arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn oversized_chunk_size_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "one.txt", b"a\n");

    for size in ["18446744073709551615", "2147483648"] {
        cl().args(["--chunk-size", size])
            .arg(&path)
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("Usage:"))
            .stderr(predicate::str::contains("error: Invalid configuration"));
    }
}
