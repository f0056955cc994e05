//! Integration tests for the tessera binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tessera() -> Command {
    let mut cmd = Command::new(cargo_bin("tessera"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn manifest(dir: &std::path::Path) -> String {
    fs::read_to_string(dir.join(".tessera/project.yml")).unwrap()
}

#[test]
fn cli_shows_help_with_subcommands() -> Result<(), Box<dyn std::error::Error>> {
    tessera()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Subcommands:"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("--project"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    tessera()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    tessera().assert().failure().code(2);
    Ok(())
}

#[test]
fn cli_init_in_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tessera()
        .current_dir(temp.path())
        .args(["init", "myproject"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Initialized tessera project 'myproject'",
        ))
        .stderr(predicate::str::contains("✗").not());

    assert!(manifest(temp.path()).contains("name: myproject"));
    assert!(temp.path().join(".tessera/assets").is_dir());
    Ok(())
}

#[test]
fn cli_init_with_project_override() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = TempDir::new()?;
    let target = TempDir::new()?;
    let project = target.path().join("x");

    tessera()
        .current_dir(cwd.path())
        .args(["-p", project.to_str().unwrap(), "init"])
        .assert()
        .success();

    assert!(manifest(&project).contains("name: x"));
    assert!(!cwd.path().join(".tessera").exists());
    Ok(())
}

#[test]
fn cli_unknown_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tessera()
        .current_dir(temp.path())
        .arg("frobnicate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown subcommand 'frobnicate'"));

    assert!(!temp.path().join(".tessera").exists());
    Ok(())
}

#[test]
fn cli_subcommand_match_is_case_sensitive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tessera()
        .current_dir(temp.path())
        .arg("INIT")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown subcommand 'INIT'"));
    Ok(())
}

#[test]
fn cli_runner_failure_is_reported_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tessera()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    tessera()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("project already initialized at"));
    Ok(())
}

#[test]
fn cli_quiet_hides_messages_but_not_errors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".gitignore"), "target\n")?;

    tessera()
        .current_dir(temp.path())
        .args(["--quiet", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added").not());

    tessera()
        .current_dir(temp.path())
        .args(["--quiet", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
    Ok(())
}

#[test]
fn cli_debug_logs_dispatch() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tessera()
        .current_dir(temp.path())
        .args(["--debug", "init", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Dispatching 'init'"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_init_io_failure_reports_path_and_cause_once() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".tessera"), "not a directory")?;

    let expected = format!(
        "✗ Failed to create {}: Not a directory (os error 20)\n",
        temp.path().join(".tessera").join("assets").display()
    );

    tessera()
        .arg("-p")
        .arg(temp.path())
        .arg("init")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(expected);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_init_manifest_write_failure_reports_cause_once() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let manifest_path = temp.path().join(".tessera").join("project.yml");
    fs::create_dir_all(&manifest_path)?;

    let expected = format!(
        "✗ Failed to access {}: File exists (os error 17)\n",
        manifest_path.display()
    );

    let output = tessera()
        .arg("-p")
        .arg(temp.path())
        .arg("init")
        .assert()
        .failure()
        .code(1)
        .stderr(expected.clone())
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.matches("os error 17").count(), 1);
    assert!(manifest_path.is_dir());
    Ok(())
}
