//! CLI integration tests
//!
//! Each test runs the `flyangt` binary inside its own temp directory, so the
//! default `.flyangt` state dir and `flyangt.toml` config are isolated.

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn flyangt(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flyangt"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn state(routes: u64, legal_status: &str) -> Value {
    json!({
        "locale": "en",
        "configCounts": {"routes": routes},
        "release": {"items": [
            {"id": "legal", "title": "Legal review", "priority": "P0", "status": legal_status}
        ]},
        "smoke": {"tests": [
            {"id": "home", "title": "Home renders", "priority": "P0", "status": "pass"}
        ]}
    })
}

fn write(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_string(value).unwrap()).unwrap();
}

fn rc_ids(dir: &Path) -> Vec<String> {
    let output = flyangt(dir, &["rc", "list"]);
    assert_success(&output);
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| line[2..].split_whitespace().next().map(str::to_string))
        .collect()
}

#[test]
fn test_diff_command_prints_report() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.json", &json!({"a": {"routes": {"count": 3}}}));
    write(dir.path(), "b.json", &json!({"a": {"routes": {"count": 4}}}));

    let output = flyangt(dir.path(), &["diff", "a.json", "b.json", "--group", "routes"]);
    assert_success(&output);
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["groupId"], json!("routes"));
    assert_eq!(report["counts"]["changed"], json!(1));
    assert_eq!(report["items"][0]["path"], json!("a.routes.count"));
}

#[test]
fn test_rc_create_list_and_changelog() {
    let dir = TempDir::new().unwrap();
    // Random ids so two RCs created within one second stay distinct
    fs::write(dir.path().join("flyangt.toml"), "[rc]\nid_mode = \"random\"\n").unwrap();
    write(dir.path(), "before.json", &state(3, "todo"));
    write(dir.path(), "after.json", &state(4, "done"));

    let first = flyangt(dir.path(), &["rc", "create", "--state", "before.json", "--name", "beta"]);
    assert_success(&first);
    assert!(String::from_utf8_lossy(&first.stdout).contains("yellow"));
    let second = flyangt(dir.path(), &["rc", "create", "--state", "after.json"]);
    assert_success(&second);
    assert!(String::from_utf8_lossy(&second.stdout).contains("green"));

    let ids = rc_ids(dir.path());
    assert_eq!(ids.len(), 2);
    let (newest, oldest) = (&ids[0], &ids[1]);

    let output = flyangt(dir.path(), &["changelog", "--from", oldest, "--to", newest]);
    assert_success(&output);
    let md = String::from_utf8_lossy(&output.stdout);
    assert!(md.starts_with("# Release notes"));
    assert!(md.contains("- updated routes: 3 -> 4"));

    let output = flyangt(
        dir.path(),
        &["changelog", "--from", oldest, "--to", newest, "--lang", "ru", "--format", "json", "--out", "exports"],
    );
    assert_success(&output);
    let written = String::from_utf8_lossy(&output.stdout).trim().to_string();
    assert!(written.ends_with(".json"));
    assert!(written.contains("-ru-"));
    let doc: Value = serde_json::from_str(&fs::read_to_string(dir.path().join(&written)).unwrap()).unwrap();
    assert_eq!(doc["meta"]["language"], json!("ru"));
}

#[test]
fn test_rc_show_delete_and_missing() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "state.json", &state(1, "done"));
    assert_success(&flyangt(dir.path(), &["rc", "create", "--state", "state.json"]));
    let id = rc_ids(dir.path()).remove(0);

    let output = flyangt(dir.path(), &["rc", "show", &id]);
    assert_success(&output);
    let record: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["id"], json!(id));
    assert_eq!(record["status"], json!("green"));

    assert_success(&flyangt(dir.path(), &["rc", "delete", &id]));
    assert!(rc_ids(dir.path()).is_empty());

    let output = flyangt(dir.path(), &["rc", "show", &id]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_NOT_FOUND"));
}

#[test]
fn test_rc_status_is_live() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "state.json", &state(1, "blocked"));
    let output = flyangt(dir.path(), &["rc", "status", "--state", "state.json"]);
    assert_success(&output);
    let status: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["status"], json!("red"));
    assert_eq!(status["summary"]["release"]["blocked"], json!(1));
    assert!(rc_ids(dir.path()).is_empty());
}

#[test]
fn test_backup_and_restore() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "state.json", &state(1, "done"));
    assert_success(&flyangt(dir.path(), &["rc", "create", "--state", "state.json"]));
    assert_success(&flyangt(dir.path(), &["rc", "backup", "--out", "backup.json"]));

    let id = rc_ids(dir.path()).remove(0);
    assert_success(&flyangt(dir.path(), &["rc", "delete", &id]));
    let output = flyangt(dir.path(), &["rc", "restore", "backup.json"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("restored 1 record(s)"));
    assert_eq!(rc_ids(dir.path()), vec![id]);
}

fn records_fixture() -> Value {
    json!([
        {"id": "old", "kind": "lead", "source": "contact_form", "status": "done", "createdAt": "2020-01-01T00:00:00Z"},
        {"id": "fresh", "kind": "lead", "source": "contact_form", "status": "done", "createdAt": "2999-01-01T00:00:00Z"},
        {"id": "new", "kind": "request", "source": "partner", "status": "new", "createdAt": "2020-01-01T00:00:00Z"}
    ])
}

#[test]
fn test_retention_report_and_apply() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "records.json", &records_fixture());

    let output = flyangt(dir.path(), &["retention", "report", "--records", "records.json", "--days", "30"]);
    assert_success(&output);
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["eligibleCount"], json!(1));
    assert_eq!(report["preview"][0]["id"], json!("old"));

    let output = flyangt(dir.path(), &["retention", "apply", "--records", "records.json", "--days", "30"]);
    assert_success(&output);
    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["archivedCount"], json!(1));

    let records: Value = serde_json::from_str(&fs::read_to_string(dir.path().join("records.json")).unwrap()).unwrap();
    assert_eq!(records[0]["status"], json!("archived"));
    assert_eq!(records[2]["status"], json!("new"));
}

#[test]
fn test_retention_apply_refuses_above_cap() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("flyangt.toml"), "[retention]\nmax_apply = 1\n").unwrap();
    write(dir.path(), "records.json", &records_fixture());

    let output = flyangt(
        dir.path(),
        &["retention", "apply", "--records", "records.json", "--days", "30", "--include-new"],
    );
    assert!(!output.status.success());
    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["success"], json!(false));
    assert_eq!(result["archivedCount"], json!(0));

    let records: Value = serde_json::from_str(&fs::read_to_string(dir.path().join("records.json")).unwrap()).unwrap();
    assert_eq!(records, records_fixture());
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("flyangt.toml"), "[rc]\nmax_records = 0\n").unwrap();
    let output = flyangt(dir.path(), &["rc", "list"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INVALID_CONFIG"));
    let run_id = stderr
        .trim_end()
        .rsplit_once("(run_id: ")
        .map(|(_, rest)| rest.trim_end_matches(')'))
        .unwrap();
    assert_eq!(run_id.len(), 36, "stderr: {}", stderr);
}
