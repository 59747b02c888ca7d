use crate::changelog::model::ChangelogDoc;

/// Pretty-printed JSON of the document
///
/// Keys follow struct field order, so output is stable across runs.
pub fn render_json(doc: &ChangelogDoc) -> String {
    // Plain data types with string keys; serialization cannot fail
    serde_json::to_string_pretty(doc).unwrap_or_else(|_| "{}".to_string())
}
