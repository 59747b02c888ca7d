//! Filesystem-backed `Storage`

use crate::errors::{io_error, persistence_error, Result};
use crate::kv::atomic::atomic_write;
use crate::kv::sharding::shard_path;
use flyangt_core::storage::Storage;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One UTF-8 file per key under `root`
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        shard_path(&self.root, key)
    }
}

impl Storage for FsStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| persistence_error(key, "stored value is not valid UTF-8")),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("kv_get", e).with_entity_id(key.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        tracing::debug!(component = module_path!(), op = "kv_set", key = key, bytes = value.len());
        atomic_write(&self.path_for(key), value.as_bytes())
            .map_err(|e| e.with_entity_id(key.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("kv_remove", e).with_entity_id(key.to_string())),
        }
    }
}
