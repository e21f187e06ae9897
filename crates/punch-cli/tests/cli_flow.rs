//! End-to-end tests for the punch binary.
//!
//! Each test points the binary at its own slot file via `PUNCH_LOG_PATH`
//! and checks the persisted JSON and the command output.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn punch_binary() -> String {
    env!("CARGO_BIN_EXE_punch").to_string()
}

fn run_punch(slot: &Path, args: &[&str]) -> Output {
    Command::new(punch_binary())
        .env("PUNCH_LOG_PATH", slot)
        .args(args)
        .output()
        .expect("failed to run punch")
}

fn slot_path(temp: &TempDir) -> PathBuf {
    temp.path().join("worklog.json")
}

fn read_slot(slot: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(slot).expect("slot file should exist");
    serde_json::from_str(&raw).expect("slot should be valid JSON")
}

#[test]
fn start_writes_a_versioned_slot() {
    let temp = TempDir::new().unwrap();
    let slot = slot_path(&temp);

    let output = run_punch(&slot, &["start", "写代码"]);
    assert!(
        output.status.success(),
        "punch start should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value = read_slot(&slot);
    assert_eq!(value["version"], 1);
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["status"], "start");
    assert_eq!(entries[0]["desc"], "写代码");
    assert!(entries[0]["time"].is_i64());
}

#[test]
fn export_collapses_the_log() {
    let temp = TempDir::new().unwrap();
    let slot = slot_path(&temp);

    // Seed the slot directly so the spans are deterministic.
    std::fs::write(
        &slot,
        r#"{"version":1,"entries":[
            {"status":"start","time":0,"desc":"A"},
            {"status":"finish","time":3600000,"desc":"ignored"},
            {"status":"start","time":7200000,"desc":"B"},
            {"status":"finish","time":7320000,"desc":""}
        ]}"#,
    )
    .unwrap();

    let output = run_punch(&slot, &["export"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "A（1小时）\nB（2分钟）\n"
    );
}

#[test]
fn export_of_an_empty_log_prints_placeholder() {
    let temp = TempDir::new().unwrap();
    let slot = slot_path(&temp);

    let output = run_punch(&slot, &["export"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "(no completed spans)\n"
    );
}

#[test]
fn remove_and_insert_reshape_the_log() {
    let temp = TempDir::new().unwrap();
    let slot = slot_path(&temp);

    std::fs::write(
        &slot,
        r#"{"version":1,"entries":[
            {"status":"start","time":1000,"desc":"a"},
            {"status":"finish","time":2000,"desc":"b"}
        ]}"#,
    )
    .unwrap();

    let output = run_punch(&slot, &["remove", "0"]);
    assert!(output.status.success());
    let value = read_slot(&slot);
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["desc"], "b");

    // Out-of-range insert clamps to the end.
    let output = run_punch(&slot, &["insert", "99"]);
    assert!(output.status.success());
    let value = read_slot(&slot);
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["status"], "start");
    assert!(entries[1].get("time").is_none());
}

#[test]
fn edit_updates_desc_and_rejects_bad_time_silently() {
    let temp = TempDir::new().unwrap();
    let slot = slot_path(&temp);

    std::fs::write(
        &slot,
        r#"{"version":1,"entries":[{"status":"start","time":1000,"desc":""}]}"#,
    )
    .unwrap();

    let output = run_punch(&slot, &["edit", "0", "--desc", "修 bug", "--time", "bogus"]);
    assert!(output.status.success());

    let value = read_slot(&slot);
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries[0]["desc"], "修 bug");
    // The malformed time left the stored value alone.
    assert_eq!(entries[0]["time"], 1000);
}

#[test]
fn edit_with_unknown_status_fails() {
    let temp = TempDir::new().unwrap();
    let slot = slot_path(&temp);

    std::fs::write(
        &slot,
        r#"{"version":1,"entries":[{"status":"start","time":1000,"desc":""}]}"#,
    )
    .unwrap();

    let output = run_punch(&slot, &["edit", "0", "--status", "paused"]);
    assert!(!output.status.success());
}

#[test]
fn reset_needs_confirmation_then_clears() {
    let temp = TempDir::new().unwrap();
    let slot = slot_path(&temp);

    run_punch(&slot, &["start"]);
    run_punch(&slot, &["reset"]);
    let value = read_slot(&slot);
    assert_eq!(value["entries"].as_array().unwrap().len(), 1);

    run_punch(&slot, &["reset", "--yes"]);
    let value = read_slot(&slot);
    assert!(value["entries"].as_array().unwrap().is_empty());
}

#[test]
fn legacy_bare_array_slot_is_readable_and_upgraded() {
    let temp = TempDir::new().unwrap();
    let slot = slot_path(&temp);

    std::fs::write(
        &slot,
        r#"[{"status":"start","time":0,"desc":"旧"},{"status":"finish","time":60000,"desc":""}]"#,
    )
    .unwrap();

    let output = run_punch(&slot, &["export"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "旧（1分钟）\n");

    // Any mutation rewrites the slot in versioned form.
    run_punch(&slot, &["doing"]);
    let value = read_slot(&slot);
    assert_eq!(value["version"], 1);
    assert_eq!(value["entries"].as_array().unwrap().len(), 3);
}
