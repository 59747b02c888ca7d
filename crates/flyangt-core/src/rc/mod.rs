//! Release candidate records.
//!
//! An RC is an immutable, timestamped bundle of readiness artifacts. Two RCs
//! are compared by diffing their artifacts group by group and feeding the
//! reports to the changelog formatter.

pub mod builders;
pub mod compare;
pub mod config;
pub mod id;
pub mod model;
pub mod registry;
pub mod status;
pub mod store;

pub use builders::{build_artifacts, create_rc};
pub use compare::{build_rc_changelog, default_diff_groups, diff_rcs, DiffGroupSpec};
pub use config::RcConfig;
pub use id::{generate_rc_id, RcIdMode};
pub use model::{
    ArtifactKind, GateStatus, I18nSummary, LocaleCoverage, Priority, RcInput, RcRecord, RcSummary,
    ReleaseChecklistState, ReleaseItem, ReleaseItemStatus, SmokeState, SmokeStatus, SmokeTest,
};
pub use registry::RcRegistry;
pub use status::{compute_status, summarize_release, summarize_smoke, ReleaseP0Summary, SmokeP0Summary};
pub use store::{RcStore, REGISTRY_KEY};
