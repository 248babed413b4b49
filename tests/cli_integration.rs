//! Binary-level tests for the girder CLI.
//!
//! Validation failures must leave the filesystem untouched and never
//! reach a subprocess; the happy path is exercised with stub `make`
//! and `git` binaries placed first on PATH.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn girder() -> Command {
    Command::cargo_bin("girder").unwrap()
}

/// Install stub `make` and `git` executables into `dir` and return a
/// PATH that resolves them first. Each stub appends its command line
/// to `calls.log` next to itself and exits zero.
#[cfg(unix)]
fn stub_tools(dir: &Path) -> String {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("calls.log");
    for tool in ["make", "git"] {
        let path = dir.join(tool);
        fs::write(
            &path,
            format!("#!/bin/sh\necho \"{tool} $*\" >> {}\n", log.display()),
        )
        .unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    let system_path = std::env::var("PATH").unwrap_or_default();
    format!("{}:{}", dir.display(), system_path)
}

// =============================================================================
// Validation failures
// =============================================================================

#[test]
fn empty_name_fails_without_touching_the_filesystem() {
    let dir = TempDir::new().unwrap();

    girder()
        .args(["new", ""])
        .arg("--cwd")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing service name"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn traversal_name_is_rejected() {
    let dir = TempDir::new().unwrap();

    girder()
        .args(["new", "../escape"])
        .arg("--cwd")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid project name"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_name_argument_is_a_usage_error() {
    girder().arg("new").assert().failure();
}

// =============================================================================
// Full pipeline with stubbed tools
// =============================================================================

#[cfg(unix)]
#[test]
fn full_run_succeeds_and_drives_every_tool() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let path = stub_tools(tools.path());

    girder()
        .args(["new", "orders"])
        .arg("--cwd")
        .arg(work.path())
        .env("PATH", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Service 'orders' is ready"));

    assert!(work.path().join("orders/go.mod").is_file());
    assert!(work.path().join("orders/Makefile").is_file());

    let calls = fs::read_to_string(tools.path().join("calls.log")).unwrap();
    let calls: Vec<&str> = calls.lines().collect();
    assert_eq!(
        calls,
        vec![
            "make deps",
            "make mock",
            "make test",
            "git init",
            "git add .",
            "git commit -m First commit",
        ]
    );
}

#[cfg(unix)]
#[test]
fn skip_flags_suppress_their_stages() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let path = stub_tools(tools.path());

    girder()
        .args(["new", "orders", "--skip-mocks", "--skip-tests", "--skip-git"])
        .arg("--cwd")
        .arg(work.path())
        .env("PATH", &path)
        .assert()
        .success();

    let calls = fs::read_to_string(tools.path().join("calls.log")).unwrap();
    assert_eq!(calls.lines().collect::<Vec<_>>(), vec!["make deps"]);
}

#[cfg(unix)]
#[test]
fn json_flag_emits_a_stage_summary() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let path = stub_tools(tools.path());

    let output = girder()
        .args(["new", "orders", "--json", "--quiet"])
        .arg("--cwd")
        .arg(work.path())
        .env("PATH", &path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["project"], "orders");
    assert_eq!(summary["module"], "orders");
    assert_eq!(summary["succeeded"], true);
    assert_eq!(summary["stages"].as_array().unwrap().len(), 5);
    // Stage identifiers match the ones used in error messages.
    assert_eq!(summary["stages"][0]["stage"], "file-generation");
    assert_eq!(summary["stages"][1]["stage"], "dependency-installation");
}

#[cfg(unix)]
#[test]
fn existing_directory_aborts_before_any_tool_runs() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let path = stub_tools(tools.path());
    fs::create_dir(work.path().join("orders")).unwrap();

    girder()
        .args(["new", "orders"])
        .arg("--cwd")
        .arg(work.path())
        .env("PATH", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert!(!tools.path().join("calls.log").exists());
}

// =============================================================================
// Completion
// =============================================================================

#[test]
fn completion_scripts_mention_the_binary() {
    girder()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("girder"));
}
