//! Integration tests for the `fritzaha` CLI binary.
//!
//! These validate argument parsing, help output, shell completions, and
//! error handling -- all without requiring a live hub. The one test that
//! does touch the network points at a closed local port.
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `fritzaha` binary with env isolation.
fn fritzaha_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fritzaha").unwrap();
    cmd.env_remove("FRITZAHA_URL")
        .env_remove("FRITZAHA_USERNAME")
        .env_remove("FRITZAHA_PASSWORD")
        .env_remove("FRITZAHA_OUTPUT")
        .env_remove("FRITZAHA_INSECURE")
        .env_remove("FRITZAHA_CA_CERT")
        .env_remove("FRITZAHA_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = fritzaha_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    fritzaha_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("home automation")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("switch"))
            .and(predicate::str::contains("radiator"))
            .and(predicate::str::contains("temperature")),
    );
}

#[test]
fn test_version_flag() {
    fritzaha_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fritzaha"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    fritzaha_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    fritzaha_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fritzaha"));
}

// ── Argument validation ─────────────────────────────────────────────

#[test]
fn test_invalid_output_format_rejected() {
    let output = fritzaha_cmd()
        .args(["--output", "csv", "devices", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_switch_set_rejects_unknown_state() {
    let output = fritzaha_cmd()
        .args(["--password", "x", "switch", "set", "Lamp", "sideways"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("sideways"),
        "Expected offending value in output:\n{text}"
    );
}

#[test]
fn test_temperature_rejects_unknown_unit() {
    let output = fritzaha_cmd()
        .args(["--password", "x", "temperature", "Lamp", "--unit", "rankine"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_url_rejected() {
    let output = fritzaha_cmd()
        .args(["--url", "not a url", "--password", "x", "ain", "Lamp"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("invalid URL"),
        "Expected URL complaint in output:\n{text}"
    );
}

// ── Connection errors ───────────────────────────────────────────────

#[test]
fn test_unreachable_hub_exits_with_connection_code() {
    // Port 1 on localhost refuses immediately; no external traffic.
    let output = fritzaha_cmd()
        .args([
            "--url",
            "http://127.0.0.1:1",
            "--password",
            "x",
            "--timeout",
            "5",
            "ain",
            "Lamp",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7), "Expected connection exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("connect"),
        "Expected connection diagnostic in output:\n{text}"
    );
}
