//! Newest-first RC registry
//!
//! Every mutating method returns a new registry; callers persist the result
//! explicitly through [`crate::rc::RcStore`].

use crate::errors::{ExError, ExErrorKind, FlyError, Result};
use crate::rc::model::RcRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Backup envelope format version
pub const BACKUP_VERSION: u64 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RcRegistry {
    records: Vec<RcRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected: Option<String>,
}

impl RcRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records, newest first
    pub fn records(&self) -> &[RcRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RcRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn latest(&self) -> Option<&RcRecord> {
        self.records.first()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_record(&self) -> Option<&RcRecord> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Prepend `record`, dropping any record with the same id, then keep at
    /// most `max` entries by evicting the oldest
    ///
    /// A selection pointing at an evicted record is cleared.
    pub fn with_record(&self, record: RcRecord, max: usize) -> Self {
        let mut records: Vec<RcRecord> = std::iter::once(record.clone())
            .chain(self.records.iter().filter(|r| r.id != record.id).cloned())
            .collect();
        records.truncate(max);

        let selected = self
            .selected
            .clone()
            .filter(|id| records.iter().any(|r| &r.id == id));
        Self { records, selected }
    }

    /// Remove the record with `id`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has that id.
    pub fn without(&self, id: &str) -> Result<Self> {
        if self.get(id).is_none() {
            return Err(FlyError::RcNotFound {
                rc_id: id.to_string(),
            }
            .into());
        }
        let records = self.records.iter().filter(|r| r.id != id).cloned().collect();
        let selected = self.selected.clone().filter(|s| s != id);
        Ok(Self { records, selected })
    }

    /// Mark `id` as the selected RC
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has that id.
    pub fn select(&self, id: &str) -> Result<Self> {
        if self.get(id).is_none() {
            return Err(FlyError::RcNotFound {
                rc_id: id.to_string(),
            }
            .into());
        }
        Ok(Self {
            records: self.records.clone(),
            selected: Some(id.to_string()),
        })
    }

    /// Parse a registry leniently
    ///
    /// Records that do not deserialize are skipped; anything other than an
    /// object with a `records` array yields an empty registry. Returns the
    /// registry and the number of skipped records.
    pub fn from_value_lenient(value: &Value) -> (Self, usize) {
        let Some(items) = value.get("records").and_then(Value::as_array) else {
            return (Self::default(), 0);
        };

        let mut skipped = 0;
        let mut records: Vec<RcRecord> = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<RcRecord>(item.clone()) {
                Ok(record) if !records.iter().any(|r| r.id == record.id) => records.push(record),
                _ => skipped += 1,
            }
        }

        let selected = value
            .get("selected")
            .and_then(Value::as_str)
            .filter(|id| records.iter().any(|r| r.id == *id))
            .map(str::to_string);

        (Self { records, selected }, skipped)
    }

    /// Serialize into the versioned backup envelope
    pub fn to_backup_json(&self, exported_at: DateTime<Utc>) -> Result<String> {
        let envelope = json!({
            "version": BACKUP_VERSION,
            "exportedAt": exported_at,
            "registry": serde_json::to_value(self)?,
        });
        Ok(serde_json::to_string_pretty(&envelope)?)
    }

    /// Import a backup envelope
    ///
    /// A bare registry object (no envelope) is accepted too. Invalid
    /// records are skipped and counted.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if `raw` is not JSON, or `InvalidInput` if
    /// the envelope carries an unsupported version.
    pub fn from_backup_json(raw: &str) -> Result<(Self, usize)> {
        let value: Value = serde_json::from_str(raw)?;
        if let Some(version) = value.get("version") {
            if version.as_u64() != Some(BACKUP_VERSION) {
                return Err(ExError::new(ExErrorKind::InvalidInput)
                    .with_op("rc_backup_import")
                    .with_message(format!("unsupported backup version {}", version)));
            }
        }
        let registry = value.get("registry").unwrap_or(&value);
        Ok(Self::from_value_lenient(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rc::model::{GateStatus, RcSummary};
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn record(id: &str) -> RcRecord {
        RcRecord {
            id: id.to_string(),
            name: id.to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            locale: "en".to_string(),
            status: GateStatus::Green,
            summary: RcSummary::default(),
            artifacts: BTreeMap::new(),
        }
    }

    #[test]
    fn test_with_record_replaces_same_id() {
        let reg = RcRegistry::new()
            .with_record(record("a"), 5)
            .with_record(record("b"), 5)
            .with_record(record("a"), 5);
        let ids: Vec<&str> = reg.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_eviction_clears_selection() {
        let reg = RcRegistry::new().with_record(record("a"), 1);
        let reg = reg.select("a").unwrap().with_record(record("b"), 1);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.selected(), None);
    }

    #[test]
    fn test_lenient_parse_skips_bad_records() {
        let good = serde_json::to_value(record("a")).unwrap();
        let value = json!({"records": [good, {"id": 3}], "selected": "zzz"});
        let (reg, skipped) = RcRegistry::from_value_lenient(&value);
        assert_eq!(reg.len(), 1);
        assert_eq!(skipped, 1);
        assert_eq!(reg.selected(), None);
    }
}
