//! End-to-end runs of the `priority-matrix` binary against a temp home.

use std::path::Path;
use std::process::{Command, Output};

fn run(home: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_priority-matrix");
    Command::new(bin)
        .arg("--home")
        .arg(home)
        .args(["--today", "2026-03-01"])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run priority-matrix binary")
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).to_string()
}

#[test]
fn add_then_list_places_task_in_quadrant() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run(
        tmp.path(),
        &[
            "add", "--title", "Fix outage", "--due", "2026-03-02", "--goal", "3", "--consequence",
            "3", "--delegate", "1", "--compounding", "0", "--late", "1", "--dependency", "1",
        ],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout(&out).contains("-> Do Now"));

    let list = run(tmp.path(), &["list"]);
    assert!(list.status.success());
    let text = stdout(&list);
    assert!(text.contains("## Do Now (1)"));
    assert!(text.contains("Fix outage | impact 7/12 | urgency 5/9"));
}

#[test]
fn invalid_scores_are_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run(tmp.path(), &["add", "--title", " ", "--late", "4"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Task title is required."));
    assert!(err.contains("Urgency scores must be between 0 and 3."));
}

#[test]
fn settings_change_reclassifies_samples() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(run(tmp.path(), &["samples"]).status.success());

    let before = stdout(&run(tmp.path(), &["list", "--today-focus"]));
    assert!(before.contains("## Do Now (2)"));

    assert!(run(tmp.path(), &["settings", "set", "--impact", "3", "--urgency", "3"]).status.success());
    let after = stdout(&run(tmp.path(), &["list", "--today-focus"]));
    assert!(after.contains("## Do Now (4)"));
    assert!(after.contains("[sample-5] Clear support inbox backlog"));
    assert!(!after.contains("## Drop"));
}

#[test]
fn corrupted_task_file_starts_empty() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("priority-matrix-tasks.json"), "{not json").unwrap();
    let out = run(tmp.path(), &["list", "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["columns"].as_array().unwrap().len(), 4);
}

#[test]
fn complete_hides_task_from_board() {
    let tmp = tempfile::tempdir().unwrap();
    run(tmp.path(), &["samples"]);
    assert!(run(tmp.path(), &["complete", "sample-1"]).status.success());
    let text = stdout(&run(tmp.path(), &["list"]));
    assert!(!text.contains("sample-1"));
    assert!(text.contains("sample-2"));
}

#[test]
fn unreadable_record_survives_a_write() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(run(tmp.path(), &["samples"]).status.success());

    let path = tmp.path().join("priority-matrix-tasks.json");
    let mut records: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let mut odd = records[0].clone();
    odd["id"] = "imported-1".into();
    odd["estimatedMinutes"] = serde_json::json!(30.5);
    records.push(odd);
    std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

    let out = run(tmp.path(), &["add", "--title", "New thing"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let after: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(after.len(), 10);
    assert!(after.iter().any(|r| r["id"] == "imported-1"));
}
