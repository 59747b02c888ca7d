//! Error handling for flyangt-store
//!
//! Wraps flyangt-core ExError with store-specific helpers

use flyangt_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an IO error naming the file involved
pub fn io_error_at(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    io_error(operation, err).with_entity_id(path.display().to_string())
}

/// Create a persistence error for a storage key
pub fn persistence_error(key: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("kv_store")
        .with_entity_id(key.to_string())
        .with_message(reason.to_string())
}

/// Create a serialization error for a file
pub fn serialization_error(path: &Path, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("json_file")
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}
