//! CLI integration tests using the REAL venvup binary

mod common;

use predicates::prelude::*;

#[allow(deprecated)]
fn venvup_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("venvup").unwrap()
}

#[test]
fn test_help_output() {
    venvup_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment bootstrapper"))
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("doctor"))
        .stdout(predicate::str::contains("version"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_setup_help_output() {
    venvup_cmd()
        .args(["setup", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"))
        .stdout(predicate::str::contains("--skip-corpora"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_output() {
    venvup_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("venvup"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    venvup_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("venvup"));
}

#[test]
fn test_completions_unknown_shell() {
    venvup_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_unknown_command() {
    venvup_cmd()
        .arg("unknown")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_dry_run_prints_plan() {
    let project = common::TestProject::new();
    project
        .venvup_cmd()
        .args(["setup", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create virtual environment"))
        .stdout(predicate::str::contains("Would install dependencies"))
        .stdout(predicate::str::contains("Would download NLTK corpora"));

    // Dry run must not touch the project
    assert!(!project.file_exists("venv"));
    assert!(!project.file_exists("logs"));
    assert!(!project.file_exists(".env"));
}
