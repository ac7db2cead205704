//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn letterdrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("letterdrill").unwrap()
}

/// A command isolated from the user's config and settings.
fn isolated(dir: &TempDir) -> Command {
    let mut cmd = letterdrill();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("LETTERDRILL_SETTINGS", dir.path().join("settings.json"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    letterdrill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Letter/number alphabet drills"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("index"));
}

#[test]
fn version_output() {
    letterdrill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("letterdrill"));
}

#[test]
fn index_lists_all_letters() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Zulu"))
        .stdout(predicate::str::contains("26"));
}

#[test]
fn play_grades_answers() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["play", "--start", "B", "--end", "B", "--count", "2", "--seed", "1", "--no-save"])
        .write_stdin("2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Wrong. Correct answer: 2"))
        .stdout(predicate::str::contains("Score: 1/2"));
}

#[test]
fn play_rejects_reversed_range() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["play", "--start", "Z", "--end", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn play_rejects_huge_question_count() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["play", "--count", "4000000000", "--no-save"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many questions"));
}

#[test]
fn play_rejects_unknown_mode() {
    letterdrill()
        .args(["play", "--mode", "sideways"])
        .assert()
        .failure();
}

#[test]
fn play_grid_allows_retry() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["play", "--mode", "grid", "--start", "A", "--end", "C", "--no-save"])
        .write_stdin("1 2 4\n1,2,3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrong: 1 (C)"))
        .stdout(predicate::str::contains("All correct!"))
        .stdout(predicate::str::contains("Score: 3/3"));
}

#[test]
fn play_stops_at_end_of_input() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["play", "--start", "A", "--end", "E", "--count", "3", "--no-save"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0/3"));
}

#[test]
fn settings_are_remembered_and_reset() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["play", "--mode", "n2l", "--start", "C", "--end", "C", "--count", "1"])
        .write_stdin("c\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));
    assert!(dir.path().join("settings.json").exists());

    isolated(&dir)
        .arg("play")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number: 3"))
        .stdout(predicate::str::contains("Score: 0/1"));

    isolated(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings cleared"));

    isolated(&dir)
        .args(["play", "--no-save"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Letter: "))
        .stdout(predicate::str::contains("Score: 0/10"));
}

#[test]
fn report_can_be_reviewed() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("out").join("report.json");
    isolated(&dir)
        .args(["play", "--start", "H", "--end", "H", "--count", "1", "--no-save", "--report"])
        .arg(&report)
        .write_stdin("8\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let json = std::fs::read_to_string(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["result"]["num_correct"], 1);

    isolated(&dir)
        .args(["review", "--format", "markdown", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [x] H → 8"));

    isolated(&dir)
        .args(["review", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Range: H-H"))
        .stdout(predicate::str::contains("Score: 1/1"));
}

#[test]
fn review_missing_report_fails() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["review", "--report", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read report"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["index", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn init_creates_config_once() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created letterdrill.toml"));
    assert!(dir.path().join("letterdrill.toml").exists());

    isolated(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    // The sample config is picked up by later commands.
    isolated(&dir).arg("index").assert().success();
}
