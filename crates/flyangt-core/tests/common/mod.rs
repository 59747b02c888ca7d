use chrono::{DateTime, TimeZone, Utc};
use flyangt_core::rc::{
    Priority, RcInput, ReleaseChecklistState, ReleaseItem, ReleaseItemStatus, SmokeState,
    SmokeStatus, SmokeTest,
};
use flyangt_core::retention::{RecordKind, RecordStatus, RetentionRecord};

/// Fixed reference instant used across tests
#[allow(dead_code)]
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn release_item(id: &str, priority: Priority, status: ReleaseItemStatus) -> ReleaseItem {
    ReleaseItem {
        id: id.to_string(),
        title: format!("Item {}", id),
        priority,
        status,
    }
}

#[allow(dead_code)]
pub fn smoke_test(id: &str, priority: Priority, status: SmokeStatus) -> SmokeTest {
    SmokeTest {
        id: id.to_string(),
        title: format!("Smoke {}", id),
        priority,
        status,
    }
}

/// An input whose gate is green
#[allow(dead_code)]
pub fn green_input() -> RcInput {
    RcInput {
        locale: "en".to_string(),
        config_counts: [("routes".to_string(), 3), ("modules".to_string(), 7)]
            .into_iter()
            .collect(),
        release: ReleaseChecklistState {
            items: vec![release_item("r1", Priority::P0, ReleaseItemStatus::Done)],
        },
        smoke: SmokeState {
            tests: vec![smoke_test("s1", Priority::P0, SmokeStatus::Pass)],
        },
        i18n: None,
    }
}

#[allow(dead_code)]
pub fn record(id: &str, status: RecordStatus, age_days: i64, now: DateTime<Utc>) -> RetentionRecord {
    RetentionRecord {
        id: id.to_string(),
        kind: RecordKind::Lead,
        source: "contact_form".to_string(),
        status,
        created_at: now - chrono::Duration::days(age_days),
        contact: None,
    }
}
