//! Shared helpers for integration tests.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// The `patterns` binary with an isolated config directory.
///
/// The returned `TempDir` must outlive the command.
pub fn patterns_cmd() -> (TempDir, Command) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut cmd = Command::cargo_bin("patterns").expect("binary should build");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path())
        .env("HOME", temp_dir.path())
        .env_remove("RUST_LOG");
    (temp_dir, cmd)
}

/// Write `content` to a config file inside `dir` and return its path.
pub fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    path
}
