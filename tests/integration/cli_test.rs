//! Integration tests for the `patterns` binary.

use predicates::prelude::*;

use super::helpers::{patterns_cmd, write_config};

#[test]
fn run_without_arguments_executes_every_demo() {
    let (_dir, mut cmd) = patterns_cmd();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AbstractFactory:"))
        .stdout(predicate::str::contains("All variables are the same? true"))
        .stdout(predicate::str::contains("--- File: Nothing to see here.jpg"))
        .stdout(predicate::str::contains("Playing track: Track 10"))
        .stdout(predicate::str::contains("Good job! You are back to safe speed."))
        .stdout(predicate::str::contains("Press Enter").not());
}

#[test]
fn run_selected_demo_only() {
    let (_dir, mut cmd) = patterns_cmd();
    cmd.args(["run", "proxy", "--no-pause"])
        .assert()
        .success()
        .stdout("Proxy:\nActual subject is called.\n");
}

#[test]
fn run_honours_config_file() {
    let (dir, mut cmd) = patterns_cmd();
    let config = write_config(&dir, "[iterator]\ntrack_count = 2\n");

    cmd.arg("--config")
        .arg(&config)
        .args(["run", "iterator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Playing track: Track 2"))
        .stdout(predicate::str::contains("Track 3").not());
}

#[test]
fn empty_playlist_fails_the_run() {
    let (dir, mut cmd) = patterns_cmd();
    let config = write_config(&dir, "[iterator]\ntrack_count = 0\n");

    cmd.arg("--config")
        .arg(&config)
        .args(["run", "iterator"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("End of playlist"))
        .stderr(predicate::str::contains("playlist is empty"));
}

#[test]
fn invalid_config_is_reported() {
    let (dir, mut cmd) = patterns_cmd();
    let config = write_config(&dir, "[observer\n");

    cmd.arg("--config")
        .arg(&config)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn list_names_every_demo() {
    let (_dir, mut cmd) = patterns_cmd();
    cmd.arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("abstract-factory"))
        .stdout(predicate::str::contains("iterator"))
        .stdout(predicate::str::contains("observer"));
}

#[test]
fn config_show_prints_defaults() {
    let (_dir, mut cmd) = patterns_cmd();
    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("track_count = 10"))
        .stdout(predicate::str::contains("speed_limit = 100"));
}

#[test]
fn unknown_demo_is_a_usage_error() {
    let (_dir, mut cmd) = patterns_cmd();
    cmd.args(["run", "visitor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
