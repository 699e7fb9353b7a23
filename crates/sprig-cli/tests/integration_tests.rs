//! End-to-end tests for the `sprig` binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `sprig` command isolated from the host's config, env and terminal.
fn sprig(cwd: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("sprig");
    cmd.current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SPRIG_DEFAULTS__FOLDER")
        .env_remove("SPRIG_OUTPUT__FORMAT");
    cmd
}

const EXPECTED_FILES: [&str; 9] = [
    "src/acme/__init__.py",
    "tests/__init__.py",
    "LICENSE.txt",
    ".gitignore",
    "README.md",
    "pyproject.toml",
    "setup.cfg",
    "setup.py",
    "tox.ini",
];

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn init_help_shows_folder_and_name() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--folder"))
        .stdout(predicate::str::contains("--name"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_creates_fresh_project() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["init", "-f", "demo", "-n", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme"));

    let root = temp.path().join("demo");
    for dir in ["src", "tests", "src/acme"] {
        assert!(root.join(dir).is_dir(), "missing dir {dir}");
    }
    for file in EXPECTED_FILES {
        assert!(root.join(file).is_file(), "missing file {file}");
    }

    assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "# acme\n");
    assert!(
        fs::read_to_string(root.join("setup.py"))
            .unwrap()
            .contains(r#"name="acme""#)
    );
    assert!(fs::read(root.join("LICENSE.txt")).unwrap().is_empty());
    assert!(fs::read(root.join("src/acme/__init__.py")).unwrap().is_empty());
}

#[test]
fn literal_files_match_across_projects() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["init", "-f", "one", "-n", "alpha"])
        .assert()
        .success();
    sprig(temp.path())
        .args(["init", "-f", "two", "-n", "beta"])
        .assert()
        .success();

    for file in [".gitignore", "pyproject.toml", "setup.cfg", "tox.ini"] {
        let a = fs::read(temp.path().join("one").join(file)).unwrap();
        let b = fs::read(temp.path().join("two").join(file)).unwrap();
        assert_eq!(a, b, "{file} differs");
    }
    let gitignore = fs::read_to_string(temp.path().join("one/.gitignore")).unwrap();
    assert!(gitignore.ends_with(".cache "));
}

#[test]
fn init_defaults_to_current_directory() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["init", "--name", "acme"])
        .assert()
        .success();

    assert!(temp.path().join("src/acme/__init__.py").is_file());
    assert!(temp.path().join("tox.ini").is_file());
}

#[test]
fn rerun_overwrites_files_and_keeps_extras() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["init", "-f", "demo", "-n", "acme"])
        .assert()
        .success();

    let root = temp.path().join("demo");
    fs::write(root.join("README.md"), "edited").unwrap();
    fs::write(root.join("notes.txt"), "keep me").unwrap();

    sprig(temp.path())
        .args(["init", "-f", "demo", "-n", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("overwrote"));

    assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "# acme\n");
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "keep me");
}

#[test]
fn name_is_read_from_stdin_when_omitted() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["init", "-f", "demo"])
        .write_stdin("piped\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Project name"));

    let root = temp.path().join("demo");
    assert!(root.join("src/piped/__init__.py").is_file());
    assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "# piped\n");
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["init", "-f", "demo", "-n", "acme", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("setup.py"))
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn json_report_lists_every_entry() {
    let temp = TempDir::new().unwrap();
    let assert = sprig(temp.path())
        .args(["--output-format", "json", "init", "-f", "demo", "-n", "acme"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["project"], "acme");
    assert_eq!(report["root_created"], true);
    let entries = report["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 13);
    assert_eq!(entries[0]["outcome"], "created");
    assert_eq!(entries[12]["outcome"], "written");
}

#[test]
fn config_file_supplies_default_folder() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("sprig.toml");
    fs::write(&config, "[defaults]\nfolder = \"from-config\"\n").unwrap();

    sprig(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["init", "-n", "acme"])
        .assert()
        .success();

    assert!(temp.path().join("from-config/README.md").is_file());
}

#[test]
fn quiet_init_prints_nothing() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["-q", "init", "-f", "demo", "-n", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn config_show_prints_toml() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

#[test]
fn shell_completions() {
    let temp = TempDir::new().unwrap();
    sprig(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sprig"));
}

#[cfg(unix)]
#[test]
fn parent_step_through_symlink_follows_the_link_target() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("real/inner")).unwrap();
    std::os::unix::fs::symlink(temp.path().join("real/inner"), temp.path().join("link")).unwrap();

    sprig(temp.path())
        .args(["init", "-f", "link/../demo", "-n", "acme"])
        .assert()
        .success();

    assert!(temp.path().join("real/demo/README.md").is_file());
    assert!(!temp.path().join("demo").exists());
}
