//! Structural diff engine.
//!
//! Compares two arbitrary JSON snapshots and produces an ordered list of
//! typed differences with stable string paths.
//!
//! ## Entry point
//!
//! ```
//! use flyangt_core::diff::diff;
//! use serde_json::json;
//!
//! let a = json!({"a": {"routes": {"count": 3}}});
//! let b = json!({"a": {"routes": {"count": 4}}});
//! let report = diff("routes", Some(&a), Some(&b), 20);
//! assert_eq!(report.items[0].path, "a.routes.count");
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: items are sorted by path; identical inputs give
//!   identical output.
//! - **Coarse add/remove**: a subtree present on one side only is one item.
//! - **Pre-truncation counts**: `counts` always describe every difference,
//!   even when `items` was cut to `max_items`.

pub mod engine;
pub mod model;

pub use engine::diff;
pub use model::{DiffCounts, DiffGroupReport, DiffItem, DiffKind};
