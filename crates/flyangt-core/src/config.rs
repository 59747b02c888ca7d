//! Tooling configuration loaded from TOML
//!
//! ```toml
//! [rc]
//! id_mode = "random"
//! max_records = 10
//!
//! [changelog.formatting]
//! max_items_per_section = 25
//!
//! [retention]
//! max_apply = 100
//! ```
//!
//! Every section and field is optional and falls back to its default.

use crate::changelog::ChangelogConfig;
use crate::errors::{ExError, ExErrorKind, FlyError, Result};
use crate::guard::RateLimitConfig;
use crate::rc::RcConfig;
use crate::retention::RetentionConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolingConfig {
    pub rc: RcConfig,
    pub changelog: ChangelogConfig,
    pub retention: RetentionConfig,
    pub rate_limit: RateLimitConfig,
}

fn invalid(reason: impl Into<String>) -> ExError {
    FlyError::InvalidConfig {
        reason: reason.into(),
    }
    .into()
}

impl ToolingConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on TOML syntax errors, unknown enum values
    /// and failed validation.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: ToolingConfig = toml::from_str(raw).map_err(|e| invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file exists but cannot be read, and
    /// `InvalidConfig` as for [`ToolingConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw).map_err(|e| e.with_entity_id(path.display().to_string())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    component = module_path!(),
                    op = "config_load",
                    path = %path.display(),
                    "no config file; using defaults"
                );
                Ok(Self::default())
            }
            Err(err) => Err(ExError::new(ExErrorKind::Io)
                .with_op("config_load")
                .with_entity_id(path.display().to_string())
                .with_message(err.to_string())),
        }
    }

    /// Check caps and identifiers
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for zero caps or windows, duplicate group
    /// ids, empty RC id prefix and inverted age buckets.
    pub fn validate(&self) -> Result<()> {
        if self.rc.max_records == 0 {
            return Err(invalid("rc.max_records must be at least 1"));
        }
        if self.rc.max_diff_items == 0 {
            return Err(invalid("rc.max_diff_items must be at least 1"));
        }
        if self.rc.id_prefix.trim().is_empty() {
            return Err(invalid("rc.id_prefix must not be empty"));
        }
        unique_ids("rc.diff_groups", self.rc.diff_groups.iter().map(|g| g.id.as_str()))?;

        if self.changelog.formatting.max_items_per_section == 0 {
            return Err(invalid("changelog.formatting.max_items_per_section must be at least 1"));
        }
        unique_ids("changelog.groups", self.changelog.groups.iter().map(|g| g.id.as_str()))?;

        if self.retention.max_apply == 0 {
            return Err(invalid("retention.max_apply must be at least 1"));
        }
        if let Some(bucket) = self
            .retention
            .age_buckets
            .iter()
            .find(|b| b.max_days.is_some_and(|max| max < b.min_days))
        {
            return Err(invalid(format!(
                "retention age bucket '{}' has max_days below min_days",
                bucket.label
            )));
        }

        if self.rate_limit.window_secs == 0 || self.rate_limit.max_hits == 0 {
            return Err(invalid("rate_limit.window_secs and rate_limit.max_hits must be at least 1"));
        }
        Ok(())
    }
}

fn unique_ids<'a>(section: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(invalid(format!("duplicate id '{}' in {}", id, section)));
        }
    }
    Ok(())
}
