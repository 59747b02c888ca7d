//! Diff-to-changelog classification and bullet formatting

use crate::changelog::config::{ChangelogConfig, ChangelogGroupConfig, FormattingConfig};
use crate::changelog::model::{
    Bucket, ChangelogBuckets, ChangelogDoc, ChangelogMeta, ChangelogSection, ChangelogSummary,
};
use crate::changelog::strings::Language;
use crate::diff::model::{DiffGroupReport, DiffItem, DiffKind};
use crate::logging_facility::OpTimer;
use crate::{log_op_end, log_op_start};
use chrono::{DateTime, Utc};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Longest string shown verbatim in a value hint
const HINT_MAX_CHARS: usize = 30;

/// Build the changelog document for a pair of RCs.
///
/// Groups are visited in configuration order; disabled groups, groups with
/// no matching or unchanged diff report, and groups left empty after
/// filtering contribute nothing. `group_titles` overrides configured titles
/// by group id.
pub fn build_changelog_doc(
    from_id: &str,
    to_id: &str,
    language: Language,
    reports: &[DiffGroupReport],
    config: &ChangelogConfig,
    group_titles: &BTreeMap<String, String>,
    generated_at: DateTime<Utc>,
) -> ChangelogDoc {
    let timer = OpTimer::start();
    log_op_start!("build_changelog_doc", from_id = from_id, to_id = to_id);

    let sections: Vec<ChangelogSection> = config
        .groups
        .iter()
        .filter(|group| group.enabled)
        .filter_map(|group| {
            let report = reports
                .iter()
                .find(|r| r.group_id == group.source_diff_group_id)?;
            let title = group_titles
                .get(&group.id)
                .cloned()
                .unwrap_or_else(|| group.title.clone());
            build_section(group, title, report, &config.formatting, language)
        })
        .collect();

    let summary = ChangelogSummary {
        changed_groups: sections.len(),
        total_items: sections.iter().map(|s| s.buckets.len()).sum(),
    };

    log_op_end!(
        "build_changelog_doc",
        duration_ms = timer.elapsed_ms(),
        changed_groups = summary.changed_groups,
        item_count = summary.total_items
    );

    ChangelogDoc {
        meta: ChangelogMeta {
            generated_at,
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            language,
        },
        sections,
        summary,
    }
}

fn build_section(
    group: &ChangelogGroupConfig,
    title: String,
    report: &DiffGroupReport,
    formatting: &FormattingConfig,
    language: Language,
) -> Option<ChangelogSection> {
    if !report.changed {
        return None;
    }

    let mut buckets = ChangelogBuckets::default();
    let mut truncated = false;
    for item in report
        .items
        .iter()
        .filter(|item| !is_ignored(&item.path, &group.ignore_paths))
    {
        let bucket = classify(item, group.is_notes, &formatting.fix_hints);
        let list = buckets.get_mut(bucket);
        if list.len() < formatting.max_items_per_section {
            list.push(format_item(item, language));
        } else {
            truncated = true;
        }
    }

    if buckets.is_empty() {
        return None;
    }

    Some(ChangelogSection {
        group_id: group.id.clone(),
        title,
        buckets,
        truncated,
        is_notes: group.is_notes,
    })
}

/// True if `path` starts with any prefix or has a dot-segment equal to one
///
/// Both comparisons ignore case.
pub fn is_ignored(path: &str, prefixes: &[String]) -> bool {
    let path = path.to_lowercase();
    prefixes
        .iter()
        .map(|p| p.to_lowercase())
        .filter(|p| !p.is_empty())
        .any(|p| path.starts_with(&p) || path.split('.').any(|segment| segment == p))
}

/// Pick the bucket for one diff item
pub fn classify(item: &DiffItem, is_notes: bool, fix_hints: &[String]) -> Bucket {
    if is_notes {
        return Bucket::Notes;
    }
    match item.kind {
        DiffKind::Changed if mentions_fix(&item.path, fix_hints) => Bucket::Fixed,
        DiffKind::Changed => Bucket::Changed,
        DiffKind::Added => Bucket::Added,
        DiffKind::Removed => Bucket::Removed,
    }
}

fn mentions_fix(path: &str, fix_hints: &[String]) -> bool {
    let path = path.to_lowercase();
    fix_hints
        .iter()
        .filter(|h| !h.is_empty())
        .any(|h| path.contains(&h.to_lowercase()))
}

/// Render one diff item as a localized bullet
///
/// `added` shows the new value, `removed` the old one, `changed` shows
/// `old -> new` only when both hints are non-empty and differ.
pub fn format_item(item: &DiffItem, language: Language) -> String {
    let strings = language.strings();
    let template = match item.kind {
        DiffKind::Added => strings.item_added,
        DiffKind::Changed => strings.item_changed,
        DiffKind::Removed => strings.item_removed,
    };
    let line = template.replace("{path}", &item.path);

    let hint = match item.kind {
        DiffKind::Added => value_hint(item.b.as_ref(), language),
        DiffKind::Removed => value_hint(item.a.as_ref(), language),
        DiffKind::Changed => {
            let old = value_hint(item.a.as_ref(), language);
            let new = value_hint(item.b.as_ref(), language);
            if !old.is_empty() && !new.is_empty() && old != new {
                format!("{} -> {}", old, new)
            } else {
                String::new()
            }
        }
    };

    if hint.is_empty() {
        line
    } else {
        format!("{}: {}", line, hint)
    }
}

/// Short human hint for a value
pub fn value_hint(value: Option<&Value>, language: Language) -> String {
    let strings = language.strings();
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => {
            if s.chars().count() > HINT_MAX_CHARS {
                let head: String = s.chars().take(HINT_MAX_CHARS).collect();
                format!("\"{}…\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Some(Value::Array(items)) => strings.hint_array.replace("{n}", &items.len().to_string()),
        Some(Value::Object(_)) => strings.hint_object.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_hint(n),
    }
}

/// Whole floats print without the fractional part, so `3.0` reads `3`
fn number_hint(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_hint_long_string() {
        let long = "x".repeat(40);
        let hint = value_hint(Some(&json!(long)), Language::En);
        assert_eq!(hint, format!("\"{}…\"", "x".repeat(30)));
    }

    #[test]
    fn test_value_hint_counts_chars_not_bytes() {
        let cyrillic = "я".repeat(30);
        let hint = value_hint(Some(&json!(cyrillic)), Language::Ru);
        assert_eq!(hint, format!("\"{}\"", cyrillic));
    }

    #[test]
    fn test_value_hint_containers() {
        assert_eq!(
            value_hint(Some(&json!([1, 2, 3])), Language::En),
            "(array, 3 items)"
        );
        assert_eq!(value_hint(Some(&json!({"a": 1})), Language::Ru), "(объект)");
        assert_eq!(value_hint(Some(&json!(true)), Language::En), "true");
        assert_eq!(value_hint(None, Language::En), "");
    }

    #[test]
    fn test_value_hint_whole_float_drops_fraction() {
        assert_eq!(value_hint(Some(&json!(3.0)), Language::En), "3");
        assert_eq!(value_hint(Some(&json!(2.5)), Language::En), "2.5");
        assert_eq!(value_hint(Some(&json!(-7)), Language::En), "-7");
    }

    #[test]
    fn test_changed_float_and_int_hint() {
        let item = DiffItem::changed("routes".to_string(), json!(3.0), json!(4));
        assert_eq!(format_item(&item, Language::En), "updated routes: 3 -> 4");
    }

    #[test]
    fn test_is_ignored_segment_and_prefix() {
        let prefixes = vec!["generatedAt".to_string(), "meta.build".to_string()];
        assert!(is_ignored("GENERATEDAT", &prefixes));
        assert!(is_ignored("configs.generatedat", &prefixes));
        assert!(is_ignored("meta.build.sha", &prefixes));
        assert!(!is_ignored("configs.routes.count", &prefixes));
    }

    #[test]
    fn test_fix_hint_only_for_changed() {
        let hints = vec!["bug".to_string()];
        let added = DiffItem::added("foo.bugfix".to_string(), json!(1));
        assert_eq!(classify(&added, false, &hints), Bucket::Added);
        let changed = DiffItem::changed("foo.BugFix.bar".to_string(), json!(1), json!(2));
        assert_eq!(classify(&changed, false, &hints), Bucket::Fixed);
    }

    #[test]
    fn test_changed_same_hint_omits_arrow() {
        let a = format!("{}a", "x".repeat(31));
        let b = format!("{}b", "x".repeat(31));
        let item = DiffItem::changed("title".to_string(), json!(a), json!(b));
        assert_eq!(format_item(&item, Language::En), "updated title");
    }
}
