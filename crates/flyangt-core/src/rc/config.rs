use crate::rc::compare::{default_diff_groups, DiffGroupSpec};
use crate::rc::id::RcIdMode;
use serde::{Deserialize, Serialize};

/// RC creation, retention and comparison settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RcConfig {
    pub id_mode: RcIdMode,
    pub id_prefix: String,
    /// Records kept in the registry; the oldest fall off first
    pub max_records: usize,
    /// Item cap per diff group when comparing two RCs
    pub max_diff_items: usize,
    pub diff_groups: Vec<DiffGroupSpec>,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self {
            id_mode: RcIdMode::Timestamp,
            id_prefix: "RC".to_string(),
            max_records: 20,
            max_diff_items: 200,
            diff_groups: default_diff_groups(),
        }
    }
}
