//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "questlog-cli", "--"])
        .args(args)
        .env("QUESTLOG_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_hero_status() {
    let (stdout, _stderr, code) = run_cli(&["hero", "status"]);
    assert_eq!(code, 0, "hero status failed");
    assert!(stdout.contains("level"));
    assert!(stdout.contains("gaming_minutes"));
}

#[test]
fn test_quest_list_is_json_array() {
    let (stdout, _stderr, code) = run_cli(&["quest", "list"]);
    assert_eq!(code, 0, "quest list failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("quest list is not valid JSON");
    assert!(parsed.is_array());
}

#[test]
fn test_config_show() {
    let (stdout, _stderr, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0, "config show failed");
    assert!(stdout.contains("daily_goal"));
}

#[test]
fn test_reset_requires_confirmation() {
    let (stdout, _stderr, code) = run_cli(&["reset"]);
    assert_eq!(code, 0, "reset failed");
    assert!(stdout.contains("--yes"));
}
