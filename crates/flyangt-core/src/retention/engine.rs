//! Eligibility, reporting and the archive batch

use crate::errors::{ExError, FlyError};
use crate::logging_facility::OpTimer;
use crate::retention::config::RetentionConfig;
use crate::retention::model::{
    AgeBucket, ApplyResult, BucketCount, RecordStatus, RetentionCriteria, RetentionPreviewItem,
    RetentionRecord, RetentionReport,
};
use crate::retention::updater::RecordUpdater;
use crate::{log_op_end, log_op_error, log_op_start};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// A record paired with its age and age bucket
#[derive(Debug, Clone, PartialEq)]
pub struct AgedRecord<'a> {
    pub record: &'a RetentionRecord,
    pub age_days: u64,
    pub bucket: Option<&'a str>,
}

impl AgedRecord<'_> {
    fn preview(&self) -> RetentionPreviewItem {
        RetentionPreviewItem {
            id: self.record.id.clone(),
            kind: self.record.kind,
            source: self.record.source.clone(),
            status: self.record.status,
            created_at: self.record.created_at,
            age_days: self.age_days,
            bucket: self.bucket.map(str::to_string),
        }
    }
}

/// Whole days between `created_at` and `now`; records from the future are age 0
pub fn age_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    u64::try_from((now - created_at).num_days()).unwrap_or(0)
}

/// Label of the first bucket containing `age_days`
pub fn bucket_for(buckets: &[AgeBucket], age_days: u64) -> Option<&str> {
    buckets
        .iter()
        .find(|b| b.contains(age_days))
        .map(|b| b.label.as_str())
}

pub fn is_eligible(record: &RetentionRecord, criteria: &RetentionCriteria, now: DateTime<Utc>) -> bool {
    match record.status {
        RecordStatus::Archived => return false,
        RecordStatus::New if !criteria.include_new => return false,
        _ => {}
    }
    if criteria.kind.is_some_and(|kind| kind != record.kind) {
        return false;
    }
    age_days(record.created_at, now) >= criteria.days
}

/// Eligible records, oldest first (ties by id)
fn eligible<'a>(
    records: &'a [RetentionRecord],
    criteria: &RetentionCriteria,
    config: &'a RetentionConfig,
    now: DateTime<Utc>,
) -> Vec<AgedRecord<'a>> {
    let mut aged: Vec<AgedRecord<'a>> = records
        .iter()
        .filter(|r| is_eligible(r, criteria, now))
        .map(|record| {
            let age = age_days(record.created_at, now);
            AgedRecord {
                record,
                age_days: age,
                bucket: bucket_for(&config.age_buckets, age),
            }
        })
        .collect();
    aged.sort_by(|a, b| {
        a.record
            .created_at
            .cmp(&b.record.created_at)
            .then_with(|| a.record.id.cmp(&b.record.id))
    });
    aged
}

/// Preview a retention run without touching any record
pub fn generate_report(
    records: &[RetentionRecord],
    criteria: &RetentionCriteria,
    config: &RetentionConfig,
    now: DateTime<Utc>,
) -> RetentionReport {
    let timer = OpTimer::start();
    log_op_start!("retention_report", item_count = records.len());

    let aged = eligible(records, criteria, config, now);

    let mut by_source: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
    for entry in &aged {
        *by_source.entry(entry.record.source.clone()).or_default() += 1;
        *by_status
            .entry(entry.record.status.as_str().to_string())
            .or_default() += 1;
    }

    let by_age_bucket = config
        .age_buckets
        .iter()
        .map(|bucket| BucketCount {
            label: bucket.label.clone(),
            count: aged
                .iter()
                .filter(|e| e.bucket == Some(bucket.label.as_str()))
                .count(),
        })
        .collect();

    let preview = aged
        .iter()
        .take(config.preview_limit)
        .map(AgedRecord::preview)
        .collect();

    let report = RetentionReport {
        generated_at: now,
        criteria: criteria.clone(),
        total_records: records.len(),
        eligible_count: aged.len(),
        by_source,
        by_status,
        by_age_bucket,
        preview,
        capped: aged.len() > config.max_apply,
        max_apply: config.max_apply,
    };

    log_op_end!(
        "retention_report",
        duration_ms = timer.elapsed_ms(),
        eligible_count = report.eligible_count,
        capped = report.capped
    );
    report
}

/// Archive every eligible record, one at a time
///
/// Refuses without touching anything when the eligible count exceeds
/// `config.max_apply`. Otherwise a failing update is recorded in `errors`
/// and the batch continues; `success` is false if any update failed.
pub fn apply<U: RecordUpdater + ?Sized>(
    records: &[RetentionRecord],
    criteria: &RetentionCriteria,
    config: &RetentionConfig,
    now: DateTime<Utc>,
    updater: &mut U,
) -> ApplyResult {
    let timer = OpTimer::start();
    log_op_start!("retention_apply", item_count = records.len());

    let targets = eligible(records, criteria, config, now);
    if targets.len() > config.max_apply {
        let err = FlyError::RetentionCapExceeded {
            eligible: targets.len(),
            cap: config.max_apply,
        };
        let message = err.to_string();
        log_op_error!(
            "retention_apply",
            err,
            duration_ms = timer.elapsed_ms(),
            eligible_count = targets.len()
        );
        return ApplyResult {
            success: false,
            archived_count: 0,
            errors: vec![message],
        };
    }

    let mut result = ApplyResult::default();
    for target in &targets {
        match updater.archive(&target.record.id) {
            Ok(()) => result.archived_count += 1,
            Err(err) => {
                tracing::warn!(
                    component = module_path!(),
                    op = "retention_apply",
                    record_id = target.record.id.as_str(),
                    err_code = err.code(),
                    "archive failed"
                );
                result.errors.push(describe_failure(&target.record.id, &err));
            }
        }
    }
    result.success = result.errors.is_empty();

    log_op_end!(
        "retention_apply",
        duration_ms = timer.elapsed_ms(),
        eligible_count = targets.len(),
        archived_count = result.archived_count,
        failed_count = result.errors.len()
    );
    result
}

fn describe_failure(record_id: &str, err: &ExError) -> String {
    if err.message().is_empty() {
        format!("{}: {}", record_id, err.code())
    } else {
        format!("{}: {}", record_id, err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_age_days_floors_partial_days() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(age_days(now - Duration::hours(47), now), 1);
        assert_eq!(age_days(now + Duration::days(3), now), 0);
    }

    #[test]
    fn test_bucket_first_match_wins() {
        let buckets = vec![
            AgeBucket::new("a", 0, Some(10)),
            AgeBucket::new("b", 5, None),
        ];
        assert_eq!(bucket_for(&buckets, 7), Some("a"));
        assert_eq!(bucket_for(&buckets, 11), Some("b"));
        assert_eq!(bucket_for(&buckets[..1], 11), None);
    }
}
