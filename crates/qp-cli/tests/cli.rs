//! End-to-end runs of the quarter-planner binary

use std::path::PathBuf;
use std::process::Command;

fn planner() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quarter-planner"));
    cmd.env("RUST_LOG", "off");
    cmd
}

fn write_snapshot(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("qp-cli-{}-{}.json", name, std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "period": { "start": "2025-01-06", "end": "2025-01-17" },
            "items": [
                { "id": "i1", "title": "Import", "kind": "Story", "baseDays": 4.0, "certainty": "High", "application": "FIS" },
                { "id": "i2", "title": "Report", "kind": "Story", "baseDays": 2.0, "certainty": "High" }
            ],
            "members": [
                { "id": "m1", "name": "Ada", "application": "FIS", "allocationPct": 100 }
            ]
        }"#,
    )
    .unwrap();
    path
}

#[test]
fn presets_as_json() {
    let output = planner().args(["presets", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let presets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(presets.as_array().unwrap().len(), 4);
}

#[test]
fn capacity_table_for_snapshot() {
    let path = write_snapshot("capacity");
    let output = planner()
        .args(["capacity", "--snapshot"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ada"));
    assert!(stdout.contains("total 10.00"));
}

#[test]
fn strict_generation_as_json() {
    let path = write_snapshot("strict");
    let output = planner()
        .args(["generate", "--algorithm", "strict", "--as-of", "2025-01-06", "--snapshot"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let generated: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = generated["proposal"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["status"], "fully-assigned");
    assert_eq!(items[1]["status"], "unassigned");
    assert_eq!(items[1]["assignmentReason"], "Application required for assignment");
}

#[test]
fn missing_snapshot_fails() {
    let output = planner()
        .args(["generate", "--snapshot", "/nonexistent/plan.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("reading snapshot"));
}
