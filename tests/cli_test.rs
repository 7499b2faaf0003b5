//! Integration tests for the genesis binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn genesis(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("genesis"));
    cmd.current_dir(dir.path())
        .env_remove("GENESIS_CONFIG")
        .env_remove("GENESIS_PROJECT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let temp = TempDir::new().unwrap();
    let output = genesis(&temp).args(args).output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[cfg(unix)]
fn setup_scripted_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_scripted_project(temp.path());
    temp
}

#[cfg(unix)]
fn write_scripted_project(root: &std::path::Path) {
    use std::os::unix::fs::PermissionsExt;

    let bin = root.join("bin");
    fs::create_dir_all(&bin).unwrap();
    for (name, code) in [("validate", 0), ("state", 4), ("analyze", 0), ("test", 0)] {
        let path = bin.join(format!("{}.sh", name));
        fs::write(
            &path,
            format!("#!/bin/sh\necho \"<{} ran>\"\nexit {}\n", name, code),
        )
        .unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    fs::write(
        root.join("genesis.yml"),
        r#"
delegates:
  validate: { kind: process, program: ./bin/validate.sh }
  state: { kind: process, program: ./bin/state.sh }
  analyze: { kind: process, program: ./bin/analyze.sh }
  test: { kind: process, program: ./bin/test.sh }
"#,
    )
    .unwrap();
}

#[test]
fn unknown_command_exits_with_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    genesis(&temp)
        .arg("bogus")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Unknown command: bogus"))
        .stdout(predicate::str::contains("Usage: genesis"));
    Ok(())
}

#[test]
fn unknown_flag_is_an_unknown_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    genesis(&temp)
        .arg("--bogus")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Unknown command: --bogus"));
    Ok(())
}

#[test]
fn help_forms_are_identical() {
    let help = stdout_of(&["help"]);
    assert!(help.contains("Commands:"));
    assert!(help.contains("Examples:"));

    assert_eq!(stdout_of(&[]), help);
    assert_eq!(stdout_of(&["--help"]), help);
    assert_eq!(stdout_of(&["-h"]), help);
}

#[test]
fn help_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    genesis(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("status"));
    Ok(())
}

#[test]
fn help_ignores_broken_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("genesis.yml"), "delegates: [not, a, map]")?;
    genesis(&temp).arg("help").assert().success();
    Ok(())
}

#[test]
fn version_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    genesis(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn missing_explicit_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    genesis(&temp)
        .args(["--config", "nope.yml", "validate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("genesis.yml"), "delegates: [not, a, map]")?;
    genesis(&temp)
        .arg("state")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to parse config"));
    Ok(())
}

#[test]
fn builtin_state_prints_summary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    genesis(&temp)
        .arg("state")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("📊 Checking state..."))
        .stdout(predicate::str::contains("STATE SUMMARY"));
    assert!(!temp.path().join("state.json").exists());
    Ok(())
}

#[test]
fn builtin_validate_ignores_delegate_failure() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    genesis(&temp)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("GENESIS COMMITMENT VALIDATION REPORT"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn status_runs_validate_state_analyze_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_scripted_project();
    let output = genesis(&temp).arg("status").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let positions: Vec<usize> = [
        "GENESIS COMMITMENT STATUS",
        "🔍 Running Genesis validation...",
        "<validate ran>",
        "📊 Checking state...",
        "<state ran>",
        "🔬 Running pattern analysis...",
        "<analyze ran>",
    ]
    .iter()
    .map(|needle| stdout.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
    .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(!stdout.contains("<test ran>"));
    assert!(!stdout.contains("🧪"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_command_runs_test_delegate() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_scripted_project();
    genesis(&temp)
        .arg("test")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("🧪 Running integration tests..."))
        .stdout(predicate::str::contains("<test ran>"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn extra_arguments_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_scripted_project();
    genesis(&temp)
        .args(["analyze", "--deep", "now"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<analyze ran>"))
        .stderr(predicate::str::contains("Ignoring extra arguments"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn project_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_scripted_project();
    let other = TempDir::new()?;
    genesis(&other)
        .env("GENESIS_PROJECT", temp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("<validate ran>"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn relative_project_runs_process_delegates() -> Result<(), Box<dyn std::error::Error>> {
    let parent = TempDir::new()?;
    write_scripted_project(&parent.path().join("proj"));
    genesis(&parent)
        .args(["--project", "proj", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<validate ran>"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn relative_project_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let parent = TempDir::new()?;
    write_scripted_project(&parent.path().join("proj"));
    genesis(&parent)
        .env("GENESIS_PROJECT", "proj")
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("<analyze ran>"));
    Ok(())
}

#[test]
fn missing_delegate_program_aborts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("genesis.yml"),
        "delegates:\n  validate: { kind: process, program: ./bin/missing.sh }\n",
    )?;
    genesis(&temp)
        .arg("status")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("🔍 Running Genesis validation..."))
        .stdout(predicate::str::contains("📊 Checking state...").not())
        .stderr(predicate::str::contains("Error: Failed to start delegate"));
    Ok(())
}
