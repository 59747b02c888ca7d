//! Age-based retention over lead and request records.
//!
//! [`generate_report`] previews what a run would archive; [`apply`] archives
//! the eligible records one at a time through a [`RecordUpdater`],
//! collecting per-record failures instead of aborting.

pub mod config;
pub mod engine;
pub mod model;
pub mod updater;

pub use config::{default_age_buckets, RetentionConfig};
pub use engine::{age_days, apply, bucket_for, generate_report, is_eligible, AgedRecord};
pub use model::{
    AgeBucket, ApplyResult, BucketCount, RecordKind, RecordStatus, RetentionCriteria,
    RetentionPreviewItem, RetentionRecord, RetentionReport,
};
pub use updater::{InMemoryRecords, RecordUpdater};
