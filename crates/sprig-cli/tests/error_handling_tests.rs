//! Tests for error messages, suggestions and exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn sprig(cwd: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("sprig");
    cmd.current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn target_that_is_a_file_is_a_path_conflict() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("demo"), "occupied").unwrap();

    sprig(temp.path())
        .args(["init", "-f", "demo", "-n", "acme"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Path conflict"));

    assert_eq!(fs::read_to_string(temp.path().join("demo")).unwrap(), "occupied");
}

#[test]
fn planned_directory_occupied_by_file_halts_midway() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("tests"), "not a dir").unwrap();

    sprig(temp.path())
        .args(["init", "-f", "demo", "-n", "acme"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Path conflict"));

    // `src` precedes `tests` in the plan; nothing after the failure exists.
    assert!(root.join("src").is_dir());
    assert!(!root.join("src/acme").exists());
    assert!(!root.join("README.md").exists());
}

#[test]
fn invalid_project_name_is_rejected() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["init", "-f", "demo", "-n", "a/b"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn missing_name_on_closed_stdin_fails() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["init", "-f", "demo"])
        .write_stdin("")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn missing_explicit_config_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["--config", "nope.toml", "init", "-n", "acme"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_output_format_in_config_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("sprig.toml"), "[output]\nformat = \"xml\"\n").unwrap();

    sprig(temp.path())
        .args(["--config", "sprig.toml", "init", "-n", "acme"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
    assert!(!temp.path().join("src").exists());
}

#[test]
fn unknown_subcommand_exits_with_usage_error() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path()).arg("frobnicate").assert().failure().code(2);
}

#[test]
fn verbose_error_omits_hint() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("demo"), "").unwrap();

    sprig(temp.path())
        .args(["-v", "init", "-f", "demo", "-n", "acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
