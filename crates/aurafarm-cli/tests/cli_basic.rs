//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with HOME pointed at a temp directory so the
//! user's real config is never read or written.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_aurafarm-cli"))
        .args(args)
        .env("HOME", home)
        .env_remove("AURAFARM_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {:?}\nstderr: {}", args, stderr);
    stdout
}

fn titles(json: &str) -> Vec<String> {
    let tasks: serde_json::Value = serde_json::from_str(json).expect("Failed to parse JSON output");
    tasks
        .as_array()
        .expect("expected JSON array")
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_tasks_on_simulated_baseline() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["tasks"]);
    assert!(stdout.contains("Status: Connected [simulated]"));
    assert!(stdout.contains("1. [LOW] Routine Field Inspection (1 hour)"));
}

#[test]
fn test_tasks_json_from_file() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("field.json");
    std::fs::write(
        &file,
        r#"{
            "soil": { "moisture": 25, "nitrogen": 25, "ph": 6.8 },
            "weather": { "temp": 22.5, "precipitation": 0, "windSpeed": 12.3 },
            "plants": { "ndvi": 0.72, "diseaseRisk": 0.12, "waterStress": 0.15 }
        }"#,
    )
    .unwrap();

    let stdout = run_cli_success(
        home.path(),
        &["tasks", "--json", "--file", file.to_str().unwrap()],
    );
    assert_eq!(titles(&stdout), vec!["Irrigate Field", "Routine Field Inspection"]);
}

#[test]
fn test_tasks_empty_snapshot_file() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("empty.json");
    std::fs::write(&file, "{}").unwrap();

    let stdout = run_cli_success(home.path(), &["tasks", "--file", file.to_str().unwrap()]);
    assert!(stdout.contains("No tasks required. All systems optimal."));
}

#[test]
fn test_tasks_missing_file_falls_back() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("missing.json");

    let stdout = run_cli_success(home.path(), &["tasks", "--file", missing.to_str().unwrap()]);
    assert!(stdout.contains("Status: Using Simulated Data"));
    assert!(stdout.contains("Routine Field Inspection"));
}

#[test]
fn test_tasks_from_labelled_dashboard_file() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("dashboard.json");
    std::fs::write(
        &file,
        r#"{
            "soil": {
                "moisture": { "value": 25, "unit": "%", "status": "warning" },
                "nitrogen": { "value": 25, "unit": "ppm" },
                "ph": { "value": 6.8, "unit": "" }
            },
            "plants": {
                "ndvi": { "value": 0.72, "status": "good" },
                "waterStress": { "value": 0.15, "status": "low" },
                "diseaseRisk": { "value": 0.12, "status": "low" }
            }
        }"#,
    )
    .unwrap();

    let stdout = run_cli_success(
        home.path(),
        &["tasks", "--strict", "--json", "--file", file.to_str().unwrap()],
    );
    assert_eq!(titles(&stdout), vec!["Irrigate Field", "Routine Field Inspection"]);
}

#[test]
fn test_strict_missing_file_fails() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("missing.json");

    let (stdout, stderr, code) =
        run_cli(home.path(), &["tasks", "--strict", "--file", missing.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Snapshot source error"));
    assert!(stderr.contains("missing.json"));
}

#[test]
fn test_snapshot_prints_baseline() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["snapshot"]);
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["soil"]["moisture"]["value"], 45.0);
    assert_eq!(snapshot["soil"]["nitrogen"]["status"], "warning");
    assert_eq!(snapshot["plants"]["growthStage"], "Vegetative");
}

#[test]
fn test_snapshot_seed_is_reproducible() {
    let home = tempfile::tempdir().unwrap();
    let first = run_cli_success(home.path(), &["snapshot", "--seed", "9"]);
    let second = run_cli_success(home.path(), &["snapshot", "--seed", "9"]);
    assert_eq!(first, second);
}

#[test]
fn test_rules_lists_decision_logic() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["rules"]);
    assert!(stdout.contains("Decision logic (10 rules):"));
    assert!(stdout.contains("IF soil: moisture < 30 %"));
    assert!(stdout.contains("THEN: Apply Pesticide [high, spray]"));
}

#[test]
fn test_config_set_changes_rules_and_tasks() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "thresholds.soil_moisture_min", "50"]);

    let value = run_cli_success(home.path(), &["config", "get", "thresholds.soil_moisture_min"]);
    assert_eq!(value.trim(), "50.0");

    let stdout = run_cli_success(home.path(), &["tasks", "--json"]);
    assert_eq!(titles(&stdout), vec!["Irrigate Field", "Routine Field Inspection"]);

    run_cli_success(home.path(), &["config", "reset"]);
    let value = run_cli_success(home.path(), &["config", "get", "thresholds.soil_moisture_min"]);
    assert_eq!(value.trim(), "30.0");
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "get", "thresholds.bogus"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));

    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "thresholds.bogus", "1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_watch_stops_after_count() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["watch", "--interval", "1", "--count", "2", "--json"],
    );
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);

    let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(last["refresh"], 2);
    assert_eq!(last["source"], "simulated");
    assert_eq!(last["status"]["state"], "connected");
}

#[test]
fn test_watch_rejects_zero_count() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["watch", "--interval", "1", "--count", "0"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_config_set_numeric_snapshot_path() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "snapshot_path", "2024"]);
    let value = run_cli_success(home.path(), &["config", "get", "snapshot_path"]);
    assert_eq!(value.trim(), "2024");
}

#[test]
fn test_file_conflicts_with_jitter() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["tasks", "--file", "x.json", "--jitter"]);
    assert_ne!(code, 0);
}
