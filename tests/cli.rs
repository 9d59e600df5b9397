//! End-to-end tests of the `opaque-facade` binary.
//!
//! A failed contract aborts the whole process, so the abort path can only
//! be observed from outside, by running the binary as a child process.

use assert_cmd::Command;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("opaque-facade").expect("binary builds");
    cmd.env_remove("RUST_LOG")
        .env_remove("FACADE_INIT")
        .env_remove("FACADE_ACTIONS");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// RUN
// ============================================================================

#[test]
fn run_defaults_to_ten_and_three_actions() {
    let output = bin().args(["run", "--json"]).output().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let summary: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
    assert_eq!(summary["init"], 10);
    assert_eq!(summary["actions"], 3);
    assert!(summary["facadeId"].is_u64());
}

#[test]
fn run_reads_seed_from_environment() {
    let output = bin()
        .env("FACADE_INIT", "42")
        .env("FACADE_ACTIONS", "7")
        .args(["run", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
    assert_eq!(summary["init"], 42);
    assert_eq!(summary["actions"], 7);
}

#[test]
fn run_accepts_negative_seed() {
    let output = bin()
        .args(["run", "--init", "-5", "--actions", "0"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("seeded with -5, 0 action(s) performed"));
}

#[test]
fn run_rejects_excessive_action_count() {
    let output = bin()
        .args(["run", "--actions", "5000000000"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("exceeds the limit of 1000000000"));
}

#[test]
fn run_logs_at_requested_level() {
    let output = bin()
        .args(["--log-level", "debug", "run"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = stderr_of(&output);
    assert!(stderr.contains("facade constructed"), "stderr: {}", stderr);
    assert!(stderr.contains("facade dropped"), "stderr: {}", stderr);
}

// ============================================================================
// ISOLATE
// ============================================================================

#[test]
fn isolate_reports_both_facades() {
    let output = bin()
        .args(["isolate", "--first", "1", "--second", "2", "--actions", "4", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = stdout_of(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["init"], 1);
    assert_eq!(lines[0]["actions"], 4);
    assert_eq!(lines[1]["init"], 2);
    assert_eq!(lines[1]["actions"], 0);
    assert_ne!(lines[0]["facadeId"], lines[1]["facadeId"]);
}

// ============================================================================
// CONTRACT CHECKS
// ============================================================================

#[test]
fn check_passes_for_positive_value() {
    let output = bin().args(["check", "--value", "10"]).output().unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("holds for 10"));
}

#[test]
fn check_aborts_on_violated_precondition() {
    let output = bin().args(["check", "--value", "-1"]).output().unwrap();

    // Aborted: nothing printed after the check.
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());

    let stderr = stderr_of(&output);
    assert!(stderr.contains("Contract violation: precondition `value > 0`"), "stderr: {}", stderr);
    assert!(stderr.contains("check was given -1"), "stderr: {}", stderr);
}

#[cfg(unix)]
#[test]
fn check_abort_raises_sigabrt() {
    use std::os::unix::process::ExitStatusExt;

    let output = bin().args(["check", "--value", "0"]).output().unwrap();
    assert_eq!(output.status.code(), None);
    assert_eq!(output.status.signal(), Some(6));
}

#[test]
fn check_abort_is_logged_before_termination() {
    let output = bin()
        .args(["--log-level", "error", "check", "--value", "0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("contract violation, aborting"));
}
