//! RC-to-RC comparison

use crate::changelog::{build_changelog_doc, ChangelogConfig, ChangelogDoc, Language};
use crate::diff::{diff, DiffGroupReport};
use crate::rc::model::{ArtifactKind, RcRecord};
use crate::value_path::get_path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Which part of which artifact a diff group compares
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffGroupSpec {
    pub id: String,
    pub artifact: ArtifactKind,
    /// Value path inside the artifact; the whole artifact when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl DiffGroupSpec {
    pub fn new(id: &str, artifact: ArtifactKind, path: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            artifact,
            path: path.map(str::to_string),
        }
    }

    /// The compared value in `record`, `None` if the artifact or path is missing
    pub fn extract<'a>(&self, record: &'a RcRecord) -> Option<&'a Value> {
        let artifact = record.artifact(self.artifact)?;
        match self.path.as_deref() {
            Some(path) => get_path(artifact, path),
            None => Some(artifact),
        }
    }
}

pub fn default_diff_groups() -> Vec<DiffGroupSpec> {
    vec![
        DiffGroupSpec::new("config", ArtifactKind::Snapshot, Some("configs")),
        DiffGroupSpec::new("i18n", ArtifactKind::Snapshot, Some("i18n")),
        DiffGroupSpec::new("release", ArtifactKind::ReleaseState, Some("items")),
        DiffGroupSpec::new("smoke", ArtifactKind::SmokeState, Some("tests")),
        DiffGroupSpec::new("gate", ArtifactKind::GateSummary, None),
    ]
}

/// One diff report per spec, in spec order
pub fn diff_rcs(
    from: &RcRecord,
    to: &RcRecord,
    specs: &[DiffGroupSpec],
    max_items: usize,
) -> Vec<DiffGroupReport> {
    specs
        .iter()
        .map(|spec| diff(&spec.id, spec.extract(from), spec.extract(to), max_items))
        .collect()
}

/// Diff two RCs and format the changelog in one step
pub fn build_rc_changelog(
    from: &RcRecord,
    to: &RcRecord,
    language: Language,
    specs: &[DiffGroupSpec],
    max_items: usize,
    changelog: &ChangelogConfig,
    generated_at: DateTime<Utc>,
) -> ChangelogDoc {
    let reports = diff_rcs(from, to, specs, max_items);
    build_changelog_doc(
        &from.id,
        &to.id,
        language,
        &reports,
        changelog,
        &BTreeMap::new(),
        generated_at,
    )
}
