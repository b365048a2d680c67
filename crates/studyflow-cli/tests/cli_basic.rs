//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against an isolated data
//! directory and verify outputs.

use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command against an isolated data directory.
fn run_cli(dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "studyflow-cli", "--quiet", "--"])
        .args(args)
        .env("STUDYFLOW_CONFIG_DIR", dir.path())
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(dir: &TempDir, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
    stdout
}

#[test]
fn task_add_and_list() {
    let dir = TempDir::new().unwrap();

    let stdout = run_cli_success(
        &dir,
        &[
            "task",
            "add",
            "Integrals chapter",
            "--at",
            "2099-06-08T09:00:00Z",
            "--duration",
            "60",
            "--type",
            "practice",
        ],
    );
    assert!(stdout.contains("Task created: 1"));

    let stdout = run_cli_success(&dir, &["task", "list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Integrals chapter");
    assert_eq!(tasks[0]["duration_minutes"], 60);
}

#[test]
fn reflow_packs_morning_window() {
    let dir = TempDir::new().unwrap();

    // 2099-06-08 is far enough out that the day is never in the past.
    run_cli_success(
        &dir,
        &[
            "task", "add", "Long session", "--at", "2099-06-08T14:00:00Z",
            "--duration", "90",
        ],
    );
    run_cli_success(
        &dir,
        &[
            "task", "add", "Short session", "--at", "2099-06-08T16:00:00Z",
            "--duration", "60",
        ],
    );

    let stdout = run_cli_success(
        &dir,
        &["plan", "reflow", "2099-06-08", "--preference", "morning"],
    );
    assert!(stdout.contains("Reflowed 2 task(s)"));

    let stdout = run_cli_success(&dir, &["task", "list", "--date", "2099-06-08", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let starts: Vec<&str> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["start_time"].as_str().unwrap())
        .collect();
    assert!(starts[0].contains("T06:00:00"), "got {starts:?}");
    assert!(starts[1].contains("T07:45:00"), "got {starts:?}");
}

#[test]
fn slots_listed_for_week() {
    let dir = TempDir::new().unwrap();

    run_cli_success(
        &dir,
        &[
            "task", "add", "Relocate me", "--at", "2099-06-08T09:00:00Z",
            "--duration", "45",
        ],
    );

    let stdout = run_cli_success(&dir, &["plan", "slots", "1", "--json"]);
    let days: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let days = days.as_array().unwrap();
    // The whole 2099 week is free, so every day offers at least one slot.
    assert_eq!(days.len(), 7);
    assert!(!days[0]["slots"].as_array().unwrap().is_empty());
}

#[test]
fn reflow_forbidden_on_deadline_day() {
    let dir = TempDir::new().unwrap();

    run_cli_success(
        &dir,
        &["goal", "add", "Chemistry final", "--deadline", "2099-06-08"],
    );
    run_cli_success(
        &dir,
        &[
            "task", "add", "Cram", "--at", "2099-06-08T09:00:00Z",
            "--duration", "60", "--goal", "1",
        ],
    );

    let (_, stderr, code) = run_cli(&dir, &["plan", "reflow", "2099-06-08"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("deadline"), "stderr: {stderr}");
}

#[test]
fn reflow_on_empty_day_is_a_no_op() {
    let dir = TempDir::new().unwrap();

    let stdout = run_cli_success(&dir, &["plan", "reflow", "2099-06-08"]);
    assert!(stdout.contains("nothing to reflow"));
}
