//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("esbnb").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("esbnb"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("esbnb").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "installing ESLint with the Airbnb shareable configs",
        ));
}

#[test]
fn test_unknown_config_name_shows_help() {
    // An unknown token is a help request, not an error
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("esbnb").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("airbnbb")
        .assert()
        .success()
        .stdout(predicate::str::contains("ESLint airbnb config installer"));

    // No mutation on a help request
    assert!(!temp_dir.path().join(".eslintrc").exists());
}

#[test]
fn test_hyphen_help_token_shows_help() {
    // Exit 0 with help text, whether the token lands in the positional
    // or in clap's own -h handling
    let mut cmd = Command::cargo_bin("esbnb").unwrap();
    cmd.arg("-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("esbnb"));
}

#[test]
fn test_missing_package_json_fails() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("esbnb").unwrap();
    cmd.current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("package.json"));
}

#[test]
fn test_dry_run_previews_without_mutation() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{"name": "my-project"}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("esbnb").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run preview"));

    assert!(!temp_dir.path().join(".eslintrc").exists());
}

#[test]
fn test_dry_run_leaves_existing_config_untouched() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{"name": "my-project"}"#,
    )
    .unwrap();

    let original = r#"{"extends": "airbnb-base"}"#;
    fs::write(temp_dir.path().join(".eslintrc"), original).unwrap();

    let mut cmd = Command::cargo_bin("esbnb").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("base")
        .arg("--dry-run")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join(".eslintrc")).unwrap(),
        original
    );
}
