//! Structural diff computation.
//!
//! The entry point is [`diff`], which walks two JSON values depth-first and
//! returns a [`DiffGroupReport`].

use crate::diff::model::{DiffCounts, DiffGroupReport, DiffItem};
use crate::logging_facility::OpTimer;
use crate::{log_op_end, log_op_start};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Array element fields tried, in order, for key-based alignment
const ALIGNMENT_KEYS: &[&str] = &["id", "slug"];

/// Compute the structural diff between `a` (before) and `b` (after).
///
/// `None` and `Some(Value::Null)` are both treated as absent. The report's
/// items are sorted by path and cut to `max_items`; counts are taken
/// before the cut.
pub fn diff(group_id: &str, a: Option<&Value>, b: Option<&Value>, max_items: usize) -> DiffGroupReport {
    let timer = OpTimer::start();
    log_op_start!("diff", group_id = group_id);

    let mut items = Vec::new();
    walk("", a, b, &mut items);
    items.sort_by(|x, y| x.path.cmp(&y.path));

    let counts = DiffCounts::tally(&items);
    let truncated = items.len() > max_items;
    if truncated {
        items.truncate(max_items);
    }

    log_op_end!(
        "diff",
        duration_ms = timer.elapsed_ms(),
        group_id = group_id,
        item_count = counts.total,
        truncated = truncated
    );

    DiffGroupReport {
        group_id: group_id.to_string(),
        changed: counts.total > 0,
        counts,
        items,
        truncated,
    }
}

/// Normalize `null` to absent
fn present(v: Option<&Value>) -> Option<&Value> {
    v.filter(|v| !v.is_null())
}

fn walk(path: &str, a: Option<&Value>, b: Option<&Value>, out: &mut Vec<DiffItem>) {
    match (present(a), present(b)) {
        (None, None) => {}
        (None, Some(b)) => out.push(DiffItem::added(path.to_string(), b.clone())),
        (Some(a), None) => out.push(DiffItem::removed(path.to_string(), a.clone())),
        (Some(Value::Object(a)), Some(Value::Object(b))) => walk_objects(path, a, b, out),
        (Some(Value::Array(a)), Some(Value::Array(b))) => walk_arrays(path, a, b, out),
        (Some(a), Some(b)) => {
            if !primitive_eq(a, b) {
                out.push(DiffItem::changed(path.to_string(), a.clone(), b.clone()));
            }
        }
    }
}

fn walk_objects(path: &str, a: &Map<String, Value>, b: &Map<String, Value>, out: &mut Vec<DiffItem>) {
    let keys: BTreeSet<&str> = a.keys().chain(b.keys()).map(String::as_str).collect();
    for key in keys {
        walk(&join_key(path, key), a.get(key), b.get(key), out);
    }
}

fn walk_arrays(path: &str, a: &[Value], b: &[Value], out: &mut Vec<DiffItem>) {
    match alignment_key(a, b) {
        Some(field) => {
            let a_by_key = index_by(a, field);
            let b_by_key = index_by(b, field);
            let keys: BTreeSet<&str> = a_by_key.keys().chain(b_by_key.keys()).copied().collect();
            for key in keys {
                let segment = format!("{}[{}={}]", path, field, key);
                walk(
                    &segment,
                    a_by_key.get(key).copied(),
                    b_by_key.get(key).copied(),
                    out,
                );
            }
        }
        None => {
            for idx in 0..a.len().max(b.len()) {
                walk(&format!("{}[{}]", path, idx), a.get(idx), b.get(idx), out);
            }
        }
    }
}

/// The first field every element of both arrays carries as a string
///
/// Arrays where only some elements are keyed fall back to positional
/// alignment.
fn alignment_key(a: &[Value], b: &[Value]) -> Option<&'static str> {
    ALIGNMENT_KEYS.iter().copied().find(|field| {
        a.iter().chain(b).all(|item| {
            item.as_object()
                .and_then(|obj| obj.get(*field))
                .is_some_and(Value::is_string)
        })
    })
}

/// Map alignment key to element; on duplicate keys the last element wins
fn index_by<'a>(items: &'a [Value], field: &str) -> BTreeMap<&'a str, &'a Value> {
    items
        .iter()
        .filter_map(|item| item.get(field).and_then(Value::as_str).map(|k| (k, item)))
        .collect()
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

/// Strict equality for leaves; numbers compare by value so `1` equals `1.0`
fn primitive_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}
