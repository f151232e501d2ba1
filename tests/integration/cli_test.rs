//! Integration tests for the npt binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::npt_command;

fn npt(home: &TempDir) -> Command {
    Command::from_std(npt_command(home.path()))
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    npt(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_includes_package_version() {
    let home = TempDir::new().unwrap();
    npt(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_usage_error() {
    let home = TempDir::new().unwrap();
    npt(&home).arg("--bogus").assert().code(2);
}

// ============================================================================
// Interactive mode outside a terminal
// ============================================================================

#[test]
fn bare_run_without_tty_fails_cleanly() {
    let home = TempDir::new().unwrap();
    npt(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn unknown_theme_is_rejected() {
    let home = TempDir::new().unwrap();
    npt(&home)
        .args(["--theme", "solarized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme 'solarized'"));
}

// ============================================================================
// Replay
// ============================================================================

#[test]
fn replay_prints_narrative_and_log() {
    let home = TempDir::new().unwrap();
    npt(&home)
        .args(["replay", "--seed", "4", "-c", "help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "$ ssh secret-santa@north-pole.christmas -p 2024",
        ))
        .stdout(predicate::str::contains("$ help"))
        .stdout(predicate::str::contains("Available commands:"));
}

#[test]
fn replay_json_is_valid() {
    let home = TempDir::new().unwrap();
    let output = npt(&home)
        .args(["replay", "--seed", "4", "-c", "whoami", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["seed"], 4);
    assert_eq!(value["snapshot"]["prompt_ready"], true);
    let log = value["snapshot"]["output"].as_array().unwrap();
    assert_eq!(log.len(), 6);
    assert_eq!(log[0]["kind"], "input");
    assert_eq!(log[0]["content"], "$ whoami");
}

#[test]
fn replay_is_reproducible_for_a_seed() {
    let home = TempDir::new().unwrap();
    let run = || {
        npt(&home)
            .args(["replay", "--seed", "77", "-c", "whoami", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn replay_uses_portal_from_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[portal]\nurl = \"https://example.test/wish\"\n").unwrap();

    npt(&home)
        .args(["replay", "--seed", "1", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.test/wish"))
        .stdout(predicate::str::contains("my-secret-santa.org").not());
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_init_writes_then_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("npt.toml");

    npt(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(path.exists());

    npt(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    npt(&home)
        .args(["config", "init", "--force", "--config"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn config_show_prints_parseable_toml() {
    let home = TempDir::new().unwrap();
    let output = npt(&home).args(["config", "show"]).output().unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let config = npt::Config::from_toml(&text).unwrap();
    assert_eq!(config, npt::Config::default());
}

#[test]
fn config_show_with_missing_file_fails() {
    let home = TempDir::new().unwrap();
    npt(&home)
        .args(["config", "show", "--config"])
        .arg(home.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn config_path_honors_override() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("elsewhere.toml");
    npt(&home)
        .args(["config", "path", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("elsewhere.toml"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    npt(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npt"));
}
