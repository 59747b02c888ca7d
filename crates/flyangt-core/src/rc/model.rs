//! RC inputs and records

use crate::rc::status::{ReleaseP0Summary, SmokeP0Summary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Priority tier of a checklist item or smoke test; P0 blocks a release
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    P0,
    P1,
    P2,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseItemStatus {
    Todo,
    InProgress,
    Done,
    Blocked,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseItem {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub status: ReleaseItemStatus,
}

/// Live state of the release checklist
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseChecklistState {
    #[serde(default)]
    pub items: Vec<ReleaseItem>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SmokeStatus {
    Untested,
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmokeTest {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub status: SmokeStatus,
}

/// Live state of the smoke-test run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmokeState {
    #[serde(default)]
    pub tests: Vec<SmokeTest>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocaleCoverage {
    pub total_keys: u64,
    pub missing_keys: u64,
}

/// Translation coverage per locale
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct I18nSummary {
    #[serde(default)]
    pub locales: BTreeMap<String, LocaleCoverage>,
}

impl I18nSummary {
    pub fn missing_total(&self) -> u64 {
        self.locales.values().map(|c| c.missing_keys).sum()
    }

    pub fn missing_by_locale(&self) -> BTreeMap<String, u64> {
        self.locales
            .iter()
            .map(|(locale, c)| (locale.clone(), c.missing_keys))
            .collect()
    }
}

/// Everything an RC is built from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RcInput {
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Counts of configured entities by name (routes, modules, checklists)
    #[serde(default)]
    pub config_counts: BTreeMap<String, u64>,
    #[serde(default)]
    pub release: ReleaseChecklistState,
    #[serde(default)]
    pub smoke: SmokeState,
    #[serde(default)]
    pub i18n: Option<I18nSummary>,
}

impl Default for RcInput {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            config_counts: BTreeMap::new(),
            release: ReleaseChecklistState::default(),
            smoke: SmokeState::default(),
            i18n: None,
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

/// Traffic-light readiness signal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GateStatus {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateStatus::Green => f.write_str("green"),
            GateStatus::Yellow => f.write_str("yellow"),
            GateStatus::Red => f.write_str("red"),
        }
    }
}

/// Counts frozen into an RC at creation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RcSummary {
    pub release: ReleaseP0Summary,
    pub smoke: SmokeP0Summary,
    pub i18n_missing: BTreeMap<String, u64>,
}

/// Named artifact captured into an RC
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Snapshot,
    Bundle,
    ReleaseState,
    SmokeState,
    GateSummary,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Snapshot,
        ArtifactKind::Bundle,
        ArtifactKind::ReleaseState,
        ArtifactKind::SmokeState,
        ArtifactKind::GateSummary,
    ];
}

/// Immutable release candidate snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RcRecord {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub locale: String,
    pub status: GateStatus,
    pub summary: RcSummary,
    pub artifacts: BTreeMap<ArtifactKind, Value>,
}

impl RcRecord {
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&Value> {
        self.artifacts.get(&kind)
    }
}
