use crate::retention::model::AgeBucket;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RetentionConfig {
    /// Checked in order; the first bucket containing the age wins
    pub age_buckets: Vec<AgeBucket>,
    /// Safety cap: `apply` refuses when more records are eligible
    pub max_apply: usize,
    pub preview_limit: usize,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            age_buckets: default_age_buckets(),
            max_apply: 500,
            preview_limit: 20,
        }
    }
}

pub fn default_age_buckets() -> Vec<AgeBucket> {
    vec![
        AgeBucket::new("0-30d", 0, Some(30)),
        AgeBucket::new("31-90d", 31, Some(90)),
        AgeBucket::new("91-180d", 91, Some(180)),
        AgeBucket::new("181-365d", 181, Some(365)),
        AgeBucket::new("365d+", 366, None),
    ]
}
