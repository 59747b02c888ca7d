//! Structured logging facility for the release tooling
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - `OpTimer` for the `duration_ms` field
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use flyangt_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;
pub mod timer;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
pub use timer::OpTimer;
