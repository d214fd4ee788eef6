// tests/common/mod.rs
//! 共通テストユーティリティ

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use countline_gen::{GeneratedStats, Generator};
use tempfile::TempDir;

/// `cl` with `RUST_LOG` cleared so stderr only carries what the binary prints.
pub fn cl() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cl"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Writes `contents` to `name` inside `dir`.
///
/// # Panics
///
/// Panics with a descriptive message if file creation fails.
pub fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("Failed to create test file at {}: {e}", path.display()));
    path
}

/// Generates a `line: <n>` file of at least `size` bytes.
///
/// # Panics
///
/// Panics if the generator fails.
pub fn generated_file(dir: &Path, size: u64) -> (PathBuf, GeneratedStats) {
    let path = dir.join(format!("data_{size}.txt"));
    let stats = Generator::default()
        .generate_file(size, &path)
        .unwrap_or_else(|e| panic!("Failed to generate {}: {e}", path.display()));
    (path, stats)
}
