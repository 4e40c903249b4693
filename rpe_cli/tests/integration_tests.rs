//! Integration tests for the rpelog binary.
//!
//! These tests verify end-to-end behavior including:
//! - One-shot estimate and target commands
//! - Scripted interactive sessions over stdin
//! - CSV export
//! - Config file handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary, isolated from any user config
fn cli(config_dir: &TempDir) -> Command {
    let config_path = config_dir.path().join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, "").expect("Failed to write config");
    }

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rpelog"));
    cmd.arg("--config").arg(config_path);
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("RPE lift tracker"));
}

#[test]
fn test_estimate_command() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["estimate", "--weight", "100", "--reps", "5", "--rpe", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("e1RM: 116.7kg"));
}

#[test]
fn test_estimate_unlisted_rpe_falls_back() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["estimate", "--weight", "100", "--reps", "5", "--rpe", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("e1RM: 131.8kg"));
}

#[test]
fn test_target_command() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["target", "--e1rm", "127.2", "--reps", "3", "--rpe", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target weight: 110.4kg"));
}

#[test]
fn test_scripted_session() {
    let temp_dir = setup_test_dir();
    let script = "\
log squat 100 5 8
log squat 90 5 8
log bench 80 3 9
list
best
target squat 3 9
target deadlift 5 8
quit
";

    cli(&temp_dir)
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Logged: Squat 100kg x5 @8 | e1RM: 127.2kg",
        ))
        .stdout(predicate::str::contains("3. Bench: 80kg x3 @9"))
        .stdout(predicate::str::contains("Squat: 127.2kg e1RM (100kg x5 @8)"))
        .stdout(predicate::str::contains("Target weight: 110.4kg"))
        .stdout(predicate::str::contains("No data logged for Deadlift yet."));
}

#[test]
fn test_session_is_default_command() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No lifts logged yet."));
}

#[test]
fn test_delete_out_of_range_keeps_log() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .write_stdin("log deadlift 200 3 8\ndelete 4\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No lift at position 4."))
        .stdout(predicate::str::contains("1. Deadlift: 200kg x3 @8"));
}

#[test]
fn test_bad_input_does_not_end_session() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .write_stdin("log press 50 5 8\nlog bench 80 5 8\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown exercise 'press'"))
        .stdout(predicate::str::contains("1. Bench: 80kg x5 @8"));
}

#[test]
fn test_session_export_csv() {
    let temp_dir = setup_test_dir();
    let csv_path = temp_dir.path().join("out").join("lifts.csv");

    cli(&temp_dir)
        .write_stdin(format!(
            "log squat 100 5 8\nlog bench 80 5 8\nexport {}\n",
            csv_path.display()
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 lifts"));

    let csv_content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(csv_content.starts_with("index,exercise,weight,reps,rpe,estimated_max,logged_at"));
    assert_eq!(csv_content.lines().count(), 3);
}

#[test]
fn test_config_unit_label() {
    let temp_dir = setup_test_dir();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[display]\nunit = \"lb\"\n",
    )
    .unwrap();

    cli(&temp_dir)
        .args(["estimate", "--weight", "225", "--reps", "5", "--rpe", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lb"));
}

#[test]
fn test_malformed_config_fails() {
    let temp_dir = setup_test_dir();
    fs::write(temp_dir.path().join("config.toml"), "[display\nunit = ").unwrap();

    cli(&temp_dir)
        .args(["estimate", "--weight", "100", "--reps", "5", "--rpe", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Toml"));
}
