//! Registry persistence over the `Storage` capability

use crate::errors::Result;
use crate::logging_facility::OpTimer;
use crate::rc::registry::RcRegistry;
use crate::storage::Storage;
use crate::{log_op_end, log_op_start};
use serde_json::Value;

/// Storage key of the RC registry
pub const REGISTRY_KEY: &str = "flyangt.rc.registry";

/// Explicit load and save of the registry
pub struct RcStore<S: Storage> {
    storage: S,
}

impl<S: Storage> RcStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Load the registry
    ///
    /// A missing key yields an empty registry. Stored content that is not
    /// JSON also yields an empty registry and a warning; records that fail
    /// to parse are dropped individually.
    ///
    /// # Errors
    ///
    /// Backend failures are propagated.
    pub fn load(&self) -> Result<RcRegistry> {
        let timer = OpTimer::start();
        log_op_start!("rc_store_load");

        let Some(raw) = self.storage.get(REGISTRY_KEY)? else {
            log_op_end!("rc_store_load", duration_ms = timer.elapsed_ms(), item_count = 0usize);
            return Ok(RcRegistry::new());
        };

        let registry = match serde_json::from_str::<Value>(&raw) {
            Ok(value) => {
                let (registry, skipped) = RcRegistry::from_value_lenient(&value);
                if skipped > 0 {
                    tracing::warn!(
                        component = module_path!(),
                        op = "rc_store_load",
                        skipped = skipped,
                        "dropped unreadable RC records"
                    );
                }
                registry
            }
            Err(err) => {
                tracing::warn!(
                    component = module_path!(),
                    op = "rc_store_load",
                    error = %err,
                    "stored registry is not valid JSON; starting empty"
                );
                RcRegistry::new()
            }
        };

        log_op_end!(
            "rc_store_load",
            duration_ms = timer.elapsed_ms(),
            item_count = registry.len()
        );
        Ok(registry)
    }

    /// Persist `registry`, replacing what was stored
    ///
    /// # Errors
    ///
    /// Serialization and backend failures are propagated.
    pub fn save(&mut self, registry: &RcRegistry) -> Result<()> {
        let timer = OpTimer::start();
        log_op_start!("rc_store_save", item_count = registry.len());
        let raw = serde_json::to_string(registry)?;
        self.storage.set(REGISTRY_KEY, &raw)?;
        log_op_end!("rc_store_save", duration_ms = timer.elapsed_ms());
        Ok(())
    }
}
