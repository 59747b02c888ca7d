//! FlyANGT release tooling core
//!
//! Pure in-memory kernel for the developer release tooling:
//! - Path-addressed access into JSON values
//! - Structural diff of two JSON values into a grouped report
//! - Changelog classification and Markdown/JSON rendering
//! - Release candidate artifacts, readiness gate and registry
//! - Age-based retention of lead and request records
//! - A sliding-window rate limiter
//!
//! Persistence goes through the [`storage::Storage`] trait; `flyangt-store`
//! supplies the file-backed implementation.

pub mod changelog;
pub mod clock;
pub mod config;
pub mod diff;
pub mod errors;
pub mod guard;
pub mod logging_facility;
pub mod rc;
pub mod render;
pub mod retention;
pub mod storage;
pub mod value_path;

// Macros refer to schema constants through this path
pub use flyangt_core_types;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ToolingConfig;
pub use diff::{diff, DiffGroupReport};
pub use errors::{ExError, ExErrorKind, FlyError, Result};
pub use storage::{MemoryStorage, Storage};
