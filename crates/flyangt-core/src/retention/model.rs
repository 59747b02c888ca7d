use chrono::{DateTime, Utc};
use flyangt_core_types::Sensitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Lead,
    Request,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    New,
    InProgress,
    Done,
    Archived,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::New => "new",
            RecordStatus::InProgress => "in_progress",
            RecordStatus::Done => "done",
            RecordStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lead or service request subject to retention
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RetentionRecord {
    pub id: String,
    pub kind: RecordKind,
    /// Acquisition channel (contact form, landing page, partner)
    pub source: String,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    /// Contact details; redacted in logs and never copied into reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Sensitive<String>>,
}

/// Which records a retention run targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RetentionCriteria {
    /// Minimum age in whole days
    pub days: u64,
    /// Also target records still in `new`
    #[serde(default)]
    pub include_new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RecordKind>,
}

impl RetentionCriteria {
    pub fn older_than(days: u64) -> Self {
        Self {
            days,
            include_new: false,
            kind: None,
        }
    }
}

/// Inclusive age range `[min_days, max_days]`; open-ended without `max_days`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgeBucket {
    pub label: String,
    pub min_days: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_days: Option<u64>,
}

impl AgeBucket {
    pub fn new(label: &str, min_days: u64, max_days: Option<u64>) -> Self {
        Self {
            label: label.to_string(),
            min_days,
            max_days,
        }
    }

    pub fn contains(&self, age_days: u64) -> bool {
        age_days >= self.min_days && self.max_days.map_or(true, |max| age_days <= max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketCount {
    pub label: String,
    pub count: usize,
}

/// Preview row; carries no contact details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RetentionPreviewItem {
    pub id: String,
    pub kind: RecordKind,
    pub source: String,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub age_days: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RetentionReport {
    pub generated_at: DateTime<Utc>,
    pub criteria: RetentionCriteria,
    pub total_records: usize,
    pub eligible_count: usize,
    pub by_source: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
    /// Declared bucket order; eligible records outside every bucket are not counted
    pub by_age_bucket: Vec<BucketCount>,
    /// Oldest first, at most `preview_limit` rows
    pub preview: Vec<RetentionPreviewItem>,
    /// Eligible count exceeds the safety cap; `apply` would refuse
    pub capped: bool,
    pub max_apply: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResult {
    pub success: bool,
    pub archived_count: usize,
    pub errors: Vec<String>,
}
