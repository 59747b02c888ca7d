#![allow(clippy::unwrap_used, clippy::expect_used)]

use flyangt_core::diff::{diff, DiffKind};
use serde_json::json;

#[test]
fn test_identical_values_report_no_change() {
    let v = json!({"a": {"b": [1, 2, {"c": "x"}]}, "n": null});
    let report = diff("config", Some(&v), Some(&v), 100);
    assert!(!report.changed);
    assert_eq!(report.counts.total, 0);
    assert!(report.items.is_empty());
    assert!(!report.truncated);
}

#[test]
fn test_both_absent_is_empty_report() {
    let report = diff("config", None, None, 100);
    assert!(!report.changed);
    assert_eq!(report.group_id, "config");
}

#[test]
fn test_null_counts_as_absent() {
    let report = diff("g", Some(&json!({"a": null})), Some(&json!({})), 100);
    assert!(!report.changed);

    let report = diff("g", Some(&json!(null)), Some(&json!({"a": 1})), 100);
    assert_eq!(report.counts.added, 1);
    assert_eq!(report.items[0].path, "");
}

#[test]
fn test_whole_group_added_at_root() {
    let report = diff("g", None, Some(&json!({"a": 1})), 100);
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].kind, DiffKind::Added);
    assert_eq!(report.items[0].path, "");
}

#[test]
fn test_nested_change_path() {
    let a = json!({"a": {"routes": {"count": 3}}});
    let b = json!({"a": {"routes": {"count": 4}}});
    let report = diff("config", Some(&a), Some(&b), 100);
    assert_eq!(report.items.len(), 1);
    let item = &report.items[0];
    assert_eq!(item.kind, DiffKind::Changed);
    assert_eq!(item.path, "a.routes.count");
    assert_eq!(item.a, Some(json!(3)));
    assert_eq!(item.b, Some(json!(4)));
}

#[test]
fn test_arrays_aligned_by_id() {
    let a = json!({"items": [{"id": "x", "v": 1}, {"id": "y", "v": 2}]});
    let b = json!({"items": [{"id": "y", "v": 3}, {"id": "z", "v": 4}]});
    let report = diff("release", Some(&a), Some(&b), 100);

    let paths: Vec<(&str, DiffKind)> = report
        .items
        .iter()
        .map(|i| (i.path.as_str(), i.kind))
        .collect();
    assert_eq!(
        paths,
        vec![
            ("items[id=x]", DiffKind::Removed),
            ("items[id=y].v", DiffKind::Changed),
            ("items[id=z]", DiffKind::Added),
        ]
    );
}

#[test]
fn test_reordered_keyed_array_is_unchanged() {
    let a = json!([{"slug": "home", "on": true}, {"slug": "about", "on": false}]);
    let b = json!([{"slug": "about", "on": false}, {"slug": "home", "on": true}]);
    assert!(!diff("g", Some(&a), Some(&b), 100).changed);
}

#[test]
fn test_partially_keyed_array_falls_back_to_positions() {
    let a = json!([{"id": "x", "v": 1}, {"v": 2}]);
    let b = json!([{"id": "x", "v": 1}, {"v": 3}]);
    let report = diff("g", Some(&a), Some(&b), 100);
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].path, "[1].v");
}

#[test]
fn test_positional_length_change() {
    let report = diff("g", Some(&json!([1, 2])), Some(&json!([1, 2, 3])), 100);
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].path, "[2]");
    assert_eq!(report.items[0].kind, DiffKind::Added);
}

#[test]
fn test_truncation_keeps_counts() {
    let a = json!({});
    let b = json!({"a": 1, "b": 2, "c": 3, "d": 4, "e": 5});
    let report = diff("g", Some(&a), Some(&b), 2);
    assert!(report.truncated);
    assert_eq!(report.items.len(), 2);
    assert_eq!(report.counts.added, 5);
    assert_eq!(report.counts.total, 5);
    assert_eq!(report.items[0].path, "a");
    assert_eq!(report.items[1].path, "b");
}

#[test]
fn test_max_items_zero_keeps_only_counts() {
    let report = diff("g", Some(&json!({"a": 1})), Some(&json!({"a": 2})), 0);
    assert!(report.changed);
    assert!(report.truncated);
    assert!(report.items.is_empty());
    assert_eq!(report.counts.changed, 1);
}

#[test]
fn test_items_sorted_by_path() {
    let a = json!({"z": 1, "a": {"m": 1}, "b": 1});
    let b = json!({"z": 2, "a": {"m": 2}, "b": 2});
    let report = diff("g", Some(&a), Some(&b), 100);
    let paths: Vec<&str> = report.items.iter().map(|i| i.path.as_str()).collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
}

#[test]
fn test_summary_line() {
    let report = diff("config", Some(&json!({"a": 1, "b": 1})), Some(&json!({"a": 2, "c": 1})), 100);
    assert_eq!(report.counts.added, 1);
    assert_eq!(report.counts.removed, 1);
    assert_eq!(report.counts.changed, 1);
    assert!(report.summary_line().starts_with("config: +1 -1 ~1"));
}

#[test]
fn test_report_serializes_camel_case() {
    let report = diff("g", Some(&json!({"a": 1})), Some(&json!({"a": 2})), 100);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["groupId"], json!("g"));
    assert_eq!(value["items"][0]["kind"], json!("changed"));
    assert_eq!(value["counts"]["total"], json!(1));
}
