//! Export files with generated names

use crate::changelog::model::ChangelogDoc;
use crate::changelog::strings::Language;
use crate::render::{json::render_json, markdown::render_markdown};
use chrono::{DateTime, Utc};

/// A rendered document ready to be written or downloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime: &'static str,
    pub content: Vec<u8>,
}

/// `{prefix}-{from}-{to}-{lang}-{YYYYMMDD-HHMM}.{ext}`
///
/// Characters outside `[A-Za-z0-9_-]` in the ids become `_` so the name is
/// safe on every filesystem.
pub fn export_filename(
    prefix: &str,
    from_id: &str,
    to_id: &str,
    language: Language,
    at: DateTime<Utc>,
    ext: &str,
) -> String {
    format!(
        "{}-{}-{}-{}-{}.{}",
        sanitize(prefix),
        sanitize(from_id),
        sanitize(to_id),
        language.code(),
        at.format("%Y%m%d-%H%M"),
        ext
    )
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Markdown export, named from the document meta
pub fn export_markdown(doc: &ChangelogDoc, prefix: &str, include_meta: bool) -> ExportFile {
    ExportFile {
        filename: export_filename(
            prefix,
            &doc.meta.from_id,
            &doc.meta.to_id,
            doc.meta.language,
            doc.meta.generated_at,
            "md",
        ),
        mime: "text/markdown; charset=utf-8",
        content: render_markdown(doc, include_meta).into_bytes(),
    }
}

/// JSON export, named from the document meta
pub fn export_json(doc: &ChangelogDoc, prefix: &str) -> ExportFile {
    ExportFile {
        filename: export_filename(
            prefix,
            &doc.meta.from_id,
            &doc.meta.to_id,
            doc.meta.language,
            doc.meta.generated_at,
            "json",
        ),
        mime: "application/json",
        content: render_json(doc).into_bytes(),
    }
}
