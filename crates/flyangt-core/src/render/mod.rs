//! Changelog document renderers and export files

pub mod export;
pub mod json;
pub mod markdown;

pub use export::{export_filename, export_json, export_markdown, ExportFile};
pub use json::render_json;
pub use markdown::render_markdown;
