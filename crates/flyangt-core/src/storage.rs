//! Key-value storage capability
//!
//! RC registries and backups are persisted as JSON strings under string
//! keys. The core only sees this trait; `flyangt-store` provides a
//! filesystem implementation and `MemoryStorage` serves tests.

use crate::errors::Result;
use std::collections::BTreeMap;

/// String-keyed blob storage
pub trait Storage {
    /// Read the value stored under `key`, `None` if absent
    ///
    /// # Errors
    ///
    /// Backend failures (IO, permissions) surface as `ExError`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Backend failures surface as `ExError`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    ///
    /// # Errors
    ///
    /// Backend failures surface as `ExError`.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory storage backed by a `BTreeMap`
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.remove("k").unwrap();
        assert!(storage.is_empty());
    }
}
