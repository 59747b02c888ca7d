//! Changelog formatter.
//!
//! Turns diff group reports into a bucketed, localized [`ChangelogDoc`]
//! driven by a declarative group configuration.

pub mod config;
pub mod formatter;
pub mod model;
pub mod strings;

pub use config::{ChangelogConfig, ChangelogGroupConfig, FormattingConfig};
pub use formatter::{build_changelog_doc, classify, format_item, is_ignored, value_hint};
pub use model::{Bucket, ChangelogBuckets, ChangelogDoc, ChangelogMeta, ChangelogSection, ChangelogSummary};
pub use strings::{ChangelogStrings, Language};
