//! Changelog document types

use crate::changelog::strings::{ChangelogStrings, Language};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a changelog entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Bucket {
    Added,
    Changed,
    Removed,
    Fixed,
    Notes,
}

impl Bucket {
    /// Rendering order of bucket headings
    pub const RENDER_ORDER: [Bucket; 5] = [
        Bucket::Added,
        Bucket::Changed,
        Bucket::Fixed,
        Bucket::Removed,
        Bucket::Notes,
    ];

    pub fn heading(&self, strings: &ChangelogStrings) -> &'static str {
        match self {
            Bucket::Added => strings.bucket_added,
            Bucket::Changed => strings.bucket_changed,
            Bucket::Removed => strings.bucket_removed,
            Bucket::Fixed => strings.bucket_fixed,
            Bucket::Notes => strings.bucket_notes,
        }
    }
}

/// Bullet strings per bucket
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ChangelogBuckets {
    pub added: Vec<String>,
    pub changed: Vec<String>,
    pub removed: Vec<String>,
    pub fixed: Vec<String>,
    pub notes: Vec<String>,
}

impl ChangelogBuckets {
    pub fn get(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Added => &self.added,
            Bucket::Changed => &self.changed,
            Bucket::Removed => &self.removed,
            Bucket::Fixed => &self.fixed,
            Bucket::Notes => &self.notes,
        }
    }

    pub fn get_mut(&mut self, bucket: Bucket) -> &mut Vec<String> {
        match bucket {
            Bucket::Added => &mut self.added,
            Bucket::Changed => &mut self.changed,
            Bucket::Removed => &mut self.removed,
            Bucket::Fixed => &mut self.fixed,
            Bucket::Notes => &mut self.notes,
        }
    }

    /// Sum of all bucket lengths
    pub fn len(&self) -> usize {
        Bucket::RENDER_ORDER.iter().map(|b| self.get(*b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every item in render order, bucket distinction dropped
    pub fn flatten(&self) -> Vec<&str> {
        Bucket::RENDER_ORDER
            .iter()
            .flat_map(|b| self.get(*b).iter().map(String::as_str))
            .collect()
    }
}

/// One group's content in the document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogSection {
    pub group_id: String,
    pub title: String,
    pub buckets: ChangelogBuckets,
    /// True if any bucket hit its cap
    pub truncated: bool,
    pub is_notes: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogMeta {
    pub generated_at: DateTime<Utc>,
    pub from_id: String,
    pub to_id: String,
    pub language: Language,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogSummary {
    /// Number of sections in the document
    pub changed_groups: usize,
    /// Items across all sections, after caps
    pub total_items: usize,
}

/// Top-level changelog document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangelogDoc {
    pub meta: ChangelogMeta,
    pub sections: Vec<ChangelogSection>,
    pub summary: ChangelogSummary,
}
