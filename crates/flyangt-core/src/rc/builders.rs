//! Artifact builders and RC creation

use crate::clock::Clock;
use crate::logging_facility::OpTimer;
use crate::{log_op_end, log_op_start};
use crate::rc::config::RcConfig;
use crate::rc::id::generate_rc_id;
use crate::rc::model::{ArtifactKind, GateStatus, RcInput, RcRecord, RcSummary};
use crate::rc::status::{compute_status, summarize_release, summarize_smoke, ReleaseP0Summary, SmokeP0Summary};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Config counts, locale and translation coverage
pub fn build_snapshot_artifact(input: &RcInput) -> Value {
    json!({
        "locale": input.locale,
        "configs": to_json(&input.config_counts),
        "i18n": input.i18n.as_ref().map(|s| to_json(&s.locales)).unwrap_or(Value::Null),
    })
}

pub fn build_release_state_artifact(input: &RcInput, p0: &ReleaseP0Summary) -> Value {
    json!({
        "items": to_json(&input.release.items),
        "p0": to_json(p0),
    })
}

pub fn build_smoke_state_artifact(input: &RcInput, p0: &SmokeP0Summary) -> Value {
    json!({
        "tests": to_json(&input.smoke.tests),
        "p0": to_json(p0),
    })
}

pub fn build_gate_summary_artifact(status: GateStatus, summary: &RcSummary) -> Value {
    json!({
        "status": to_json(&status),
        "release": to_json(&summary.release),
        "smoke": to_json(&summary.smoke),
        "i18nMissing": to_json(&summary.i18n_missing),
    })
}

/// Compute status and summary, then every artifact
pub fn build_artifacts(input: &RcInput) -> (GateStatus, RcSummary, BTreeMap<ArtifactKind, Value>) {
    let release = summarize_release(&input.release);
    let smoke = summarize_smoke(&input.smoke);
    let status = compute_status(&release, &smoke, input.i18n.as_ref());
    let summary = RcSummary {
        release,
        smoke,
        i18n_missing: input
            .i18n
            .as_ref()
            .map(|s| s.missing_by_locale())
            .unwrap_or_default(),
    };

    let snapshot = build_snapshot_artifact(input);
    let release_state = build_release_state_artifact(input, &release);
    let smoke_state = build_smoke_state_artifact(input, &smoke);
    let gate_summary = build_gate_summary_artifact(status, &summary);
    let bundle = json!({
        "snapshot": snapshot,
        "releaseState": release_state,
        "smokeState": smoke_state,
        "gateSummary": gate_summary,
    });

    let mut artifacts = BTreeMap::new();
    artifacts.insert(ArtifactKind::Snapshot, snapshot);
    artifacts.insert(ArtifactKind::ReleaseState, release_state);
    artifacts.insert(ArtifactKind::SmokeState, smoke_state);
    artifacts.insert(ArtifactKind::GateSummary, gate_summary);
    artifacts.insert(ArtifactKind::Bundle, bundle);

    (status, summary, artifacts)
}

/// Freeze the current state into a new RC record
///
/// The status is computed here once; later changes to the checklist or
/// smoke state do not touch the record.
pub fn create_rc<C: Clock>(input: &RcInput, name: Option<&str>, config: &RcConfig, clock: &C) -> RcRecord {
    let timer = OpTimer::start();
    let created_at = clock.now();
    let id = generate_rc_id(config.id_mode, &config.id_prefix, created_at);
    log_op_start!("create_rc", rc_id = id.as_str());

    let (status, summary, artifacts) = build_artifacts(input);

    log_op_end!(
        "create_rc",
        duration_ms = timer.elapsed_ms(),
        rc_id = id.as_str(),
        status = %status
    );

    RcRecord {
        name: name.map(str::to_string).unwrap_or_else(|| id.clone()),
        id,
        created_at,
        locale: input.locale.clone(),
        status,
        summary,
        artifacts,
    }
}
