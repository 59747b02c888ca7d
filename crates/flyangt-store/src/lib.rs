//! FlyANGT Store - file-backed persistence for the release tooling
//!
//! Provides:
//! - `FsStorage`, a `Storage` implementation with one file per key
//! - Atomic temp-and-rename writes
//! - JSON document helpers for the CLI's input and state files

pub mod errors;
pub mod files;
pub mod kv;

pub use errors::Result;
pub use kv::FsStorage;
