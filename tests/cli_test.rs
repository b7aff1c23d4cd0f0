//! Integration tests for the devcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn devcheck(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("devcheck"));
    cmd.current_dir(project)
        .env_remove("DEVCHECK_PYTHON")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Writes an executable stand-in for the interpreter. Modules in `missing`
/// fail the way a real import does; everything else reports version 1.0.
#[cfg(unix)]
fn fake_python(dir: &Path, missing: &[&str]) -> PathBuf {
    fake_python_printing(dir, missing, "")
}

/// Like [`fake_python`], but every successful import first prints `banner`
/// the way chatty libraries do.
#[cfg(unix)]
fn fake_python_printing(dir: &Path, missing: &[&str], banner: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let cases = if missing.is_empty() {
        "__none__".to_string()
    } else {
        missing.join("|")
    };
    let script = format!(
        "#!/bin/sh\nmodule=\"$3\"\ncase \"$module\" in\n  {cases}) echo \"ModuleNotFoundError: No module named '$module'\" >&2; exit 1 ;;\nesac\nprintf '%s' \"{banner}\"\necho __devcheck_version__=1.0\n"
    );
    let path = dir.join("fake-python");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devcheck(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("verify")));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devcheck(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_verbose_with_quiet() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devcheck(temp.path()).args(["-v", "-q"]).assert().failure();
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_all_groups_load() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), &[]);
    devcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Core data science stack: OK"))
        .stdout(predicate::str::contains("✅ Database connectors: OK"))
        .stdout(predicate::str::contains("✅ ML frameworks: OK"))
        .stdout(predicate::str::contains("✅ OCR tools: OK"))
        .stdout(predicate::str::contains("🚀 ML/AI environment is ready!"))
        .stdout(predicate::str::contains("Run 'jupyter' to start Jupyter Lab"))
        .stdout(predicate::str::contains("Missing dependency").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_stops_at_first_missing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), &["torch"]);
    devcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Database connectors: OK"))
        .stdout(predicate::str::contains("❌ Missing dependency: torch"))
        .stdout(predicate::str::contains("OCR tools").not())
        .stdout(predicate::str::contains("ready").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_reports_display_name_not_module() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), &["cv2"]);
    devcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ ML frameworks: OK"))
        .stdout(predicate::str::contains("❌ Missing dependency: opencv\n"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_first_capability_missing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), &["pandas"]);
    devcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("❌ Missing dependency: pandas"))
        .stdout(predicate::str::contains("OK").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_strict_exits_one_when_missing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), &["pandas"]);
    devcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .args(["verify", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Missing dependency: pandas"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_verbose_shows_reason_and_hint() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), &["sklearn"]);
    devcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ Missing dependency: scikit-learn"))
        .stdout(predicate::str::contains("No module named 'sklearn'"))
        .stdout(predicate::str::contains("Install with: pip install scikit-learn"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_verbose_versions_ignore_import_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python_printing(temp.path(), &[], "Loading plugin...\n");
    devcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("   numpy 1.0\n"))
        .stdout(predicate::str::contains("Loading plugin").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_quiet_shows_only_outcome() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), &[]);
    devcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("🚀 ML/AI environment is ready!"))
        .stdout(predicate::str::contains(": OK").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_uses_project_profile() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), &[]);
    fs::write(
        temp.path().join(".devcheck.yml"),
        "name: web\nready: Web stack is ready!\ngroups:\n  - label: HTTP\n    capabilities:\n      - name: requests\n",
    )?;
    devcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ HTTP: OK"))
        .stdout(predicate::str::contains("🚀 Web stack is ready!"));
    Ok(())
}

#[test]
fn cli_missing_interpreter_reports_first_capability() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let missing = temp.path().join("no-such-python");
    devcheck(temp.path())
        .arg("--python")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ Missing dependency: pandas"));
    Ok(())
}

#[test]
fn cli_bad_manifest_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devcheck(temp.path())
        .args(["verify", "--manifest", "missing.yml"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Profile not found"));
    Ok(())
}

#[test]
fn cli_invalid_profile_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".devcheck.yml"), "name: empty\ngroups: []\n")?;
    devcheck(temp.path())
        .arg("verify")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid profile"));
    Ok(())
}

#[test]
fn cli_non_utf8_profile_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".devcheck.yml"), b"name: x\xff\n")?;
    devcheck(temp.path())
        .arg("verify")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Failed to parse profile"));
    Ok(())
}

#[test]
fn cli_unknown_profile_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devcheck(temp.path())
        .args(["list", "--profile", "nope"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Unknown profile: nope"));
    Ok(())
}

#[test]
fn cli_list_shows_groups() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devcheck(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ml-project"))
        .stdout(predicate::str::contains("OCR tools"))
        .stdout(predicate::str::contains("pytesseract"));
    Ok(())
}

#[test]
fn cli_list_prints_in_quiet_mode() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devcheck(temp.path())
        .args(["-q", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Core data science stack"))
        .stdout(predicate::str::contains("pytesseract"));
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = devcheck(temp.path()).args(["list", "--json"]).output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["name"], "ml-project");
    assert_eq!(value["groups"][3]["label"], "OCR tools");
    Ok(())
}
