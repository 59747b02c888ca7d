//! File-per-key storage
//!
//! Provides:
//! - Filesystem `Storage` with atomic writes
//! - Sharding by first 2 hex chars of the key digest

pub(crate) mod atomic;
mod fs_store;
mod sharding;

pub use fs_store::FsStorage;
