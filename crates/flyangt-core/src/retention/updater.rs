//! Per-record update capability used by `apply`

use crate::errors::{FlyError, Result};
use crate::retention::model::{RecordStatus, RetentionRecord};

/// Sets a record's status to archived
pub trait RecordUpdater {
    /// # Errors
    ///
    /// Implementations report the failure of this one record; the batch
    /// keeps going.
    fn archive(&mut self, record_id: &str) -> Result<()>;
}

/// `RecordUpdater` over an owned list
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecords {
    records: Vec<RetentionRecord>,
}

impl InMemoryRecords {
    pub fn new(records: Vec<RetentionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RetentionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<RetentionRecord> {
        self.records
    }
}

impl RecordUpdater for InMemoryRecords {
    fn archive(&mut self, record_id: &str) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| FlyError::RecordNotFound {
                record_id: record_id.to_string(),
            })?;
        record.status = RecordStatus::Archived;
        Ok(())
    }
}
