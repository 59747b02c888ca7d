//! Diff output types.
//!
//! All types serialize with camelCase keys so reports stay compatible with
//! the JSON blobs exchanged with the site tooling.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of a single difference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Added,
    Removed,
    Changed,
}

/// One detected difference
///
/// `added` items carry only `b`, `removed` only `a`, `changed` both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffItem {
    pub kind: DiffKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<Value>,
}

impl DiffItem {
    pub fn added(path: String, value: Value) -> Self {
        Self {
            kind: DiffKind::Added,
            path,
            a: None,
            b: Some(value),
        }
    }

    pub fn removed(path: String, value: Value) -> Self {
        Self {
            kind: DiffKind::Removed,
            path,
            a: Some(value),
            b: None,
        }
    }

    pub fn changed(path: String, a: Value, b: Value) -> Self {
        Self {
            kind: DiffKind::Changed,
            path,
            a: Some(a),
            b: Some(b),
        }
    }
}

/// Per-kind item counts; `total` is always the sum of the others
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffCounts {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub total: usize,
}

impl DiffCounts {
    /// Count a slice of items by kind
    pub fn tally(items: &[DiffItem]) -> Self {
        let mut counts = Self::default();
        for item in items {
            match item.kind {
                DiffKind::Added => counts.added += 1,
                DiffKind::Removed => counts.removed += 1,
                DiffKind::Changed => counts.changed += 1,
            }
        }
        counts.total = counts.added + counts.removed + counts.changed;
        counts
    }
}

/// Result of diffing one named group of data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiffGroupReport {
    pub group_id: String,
    /// True iff any difference was found
    pub changed: bool,
    /// Counts before truncation
    pub counts: DiffCounts,
    /// Sorted by path, at most `max_items` long
    pub items: Vec<DiffItem>,
    /// True iff `items` was cut
    pub truncated: bool,
}

impl DiffGroupReport {
    /// One-line summary, e.g. `routes: +1 -0 ~2`
    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "{}: +{} -{} ~{}",
            self.group_id, self.counts.added, self.counts.removed, self.counts.changed
        );
        if self.truncated {
            line.push_str(&format!(" (showing {} of {})", self.items.len(), self.counts.total));
        }
        line
    }
}
