//! JSON documents on disk
//!
//! The CLI reads its inputs (RC state, retention records) from JSON files
//! and rewrites the records file after a retention run.

use crate::errors::{io_error_at, serialization_error, Result};
use crate::kv::atomic::atomic_write;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read and deserialize a JSON file
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `Serialization` if it does
/// not match `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|e| io_error_at("read_json", path, e))?;
    serde_json::from_str(&raw).map_err(|e| serialization_error(path, e))
}

/// Serialize `value` as pretty JSON and write it atomically
///
/// # Errors
///
/// Returns `Serialization` or `Io` on failure.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut raw = serde_json::to_string_pretty(value).map_err(|e| serialization_error(path, e))?;
    raw.push('\n');
    atomic_write(path, raw.as_bytes()).map_err(|e| e.with_entity_id(path.display().to_string()))
}
