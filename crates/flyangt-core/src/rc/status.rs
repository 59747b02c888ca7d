//! P0 summaries and the readiness gate
//!
//! Status is always derived from live checklist and smoke state; only RC
//! creation freezes it.

use crate::rc::model::{
    GateStatus, I18nSummary, Priority, ReleaseChecklistState, ReleaseItemStatus, SmokeState,
    SmokeStatus,
};
use serde::{Deserialize, Serialize};

/// P0 release checklist counts; `open` covers todo and in-progress
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseP0Summary {
    pub total: usize,
    pub done: usize,
    pub open: usize,
    pub blocked: usize,
}

/// P0 smoke counts; `open` covers untested and skipped
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmokeP0Summary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub open: usize,
}

pub fn summarize_release(state: &ReleaseChecklistState) -> ReleaseP0Summary {
    let mut summary = ReleaseP0Summary::default();
    for item in state.items.iter().filter(|i| i.priority == Priority::P0) {
        summary.total += 1;
        match item.status {
            ReleaseItemStatus::Done => summary.done += 1,
            ReleaseItemStatus::Blocked => summary.blocked += 1,
            ReleaseItemStatus::Todo | ReleaseItemStatus::InProgress => summary.open += 1,
        }
    }
    summary
}

pub fn summarize_smoke(state: &SmokeState) -> SmokeP0Summary {
    let mut summary = SmokeP0Summary::default();
    for test in state.tests.iter().filter(|t| t.priority == Priority::P0) {
        summary.total += 1;
        match test.status {
            SmokeStatus::Pass => summary.pass += 1,
            SmokeStatus::Fail => summary.fail += 1,
            SmokeStatus::Untested | SmokeStatus::Skip => summary.open += 1,
        }
    }
    summary
}

/// Readiness gate: red > yellow > green
///
/// - red: any P0 checklist item blocked or any P0 smoke test failed
/// - yellow: any P0 item or test still open, or any missing i18n key
/// - green otherwise
pub fn compute_status(
    release: &ReleaseP0Summary,
    smoke: &SmokeP0Summary,
    i18n: Option<&I18nSummary>,
) -> GateStatus {
    if release.blocked > 0 || smoke.fail > 0 {
        return GateStatus::Red;
    }
    let i18n_missing = i18n.is_some_and(|s| s.missing_total() > 0);
    if release.open > 0 || smoke.open > 0 || i18n_missing {
        return GateStatus::Yellow;
    }
    GateStatus::Green
}
