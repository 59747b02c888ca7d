//! Markdown renderer for changelog documents

use crate::changelog::model::{Bucket, ChangelogDoc, ChangelogSection};
use crate::changelog::strings::ChangelogStrings;

/// Render a [`ChangelogDoc`] as Markdown.
///
/// Layout:
/// - `# title`, then the meta block and a `---` rule when `include_meta`
/// - each non-notes section as `## title` with `### bucket` headings in
///   Added, Changed, Fixed, Removed, Notes order (empty buckets skipped)
/// - an italic notice under truncated sections
/// - all notes sections under one `## Notes`, each as `### title` with its
///   items flattened into one list
pub fn render_markdown(doc: &ChangelogDoc, include_meta: bool) -> String {
    let strings = doc.meta.language.strings();
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", strings.title));

    if include_meta {
        out.push_str(&format!("**{}:** {}  \n", strings.meta_from, doc.meta.from_id));
        out.push_str(&format!("**{}:** {}  \n", strings.meta_to, doc.meta.to_id));
        out.push_str(&format!(
            "**{}:** {}\n\n",
            strings.meta_generated,
            doc.meta.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        out.push_str("---\n\n");
    }

    if doc.sections.is_empty() {
        out.push_str(&format!("_{}_\n", strings.no_changes));
        return out;
    }

    for section in doc.sections.iter().filter(|s| !s.is_notes) {
        out.push_str(&format!("## {}\n\n", section.title));
        for bucket in Bucket::RENDER_ORDER {
            let items = section.buckets.get(bucket);
            if items.is_empty() {
                continue;
            }
            out.push_str(&format!("### {}\n\n", bucket.heading(strings)));
            push_bullets(&mut out, items.iter().map(String::as_str));
            out.push('\n');
        }
        push_truncation(&mut out, section, strings);
    }

    let notes: Vec<&ChangelogSection> = doc.sections.iter().filter(|s| s.is_notes).collect();
    if !notes.is_empty() {
        out.push_str(&format!("## {}\n\n", strings.bucket_notes));
        for section in notes {
            out.push_str(&format!("### {}\n\n", section.title));
            push_bullets(&mut out, section.buckets.flatten().into_iter());
            out.push('\n');
            push_truncation(&mut out, section, strings);
        }
    }

    out
}

fn push_bullets<'a>(out: &mut String, items: impl Iterator<Item = &'a str>) {
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
}

fn push_truncation(out: &mut String, section: &ChangelogSection, strings: &ChangelogStrings) {
    if section.truncated {
        out.push_str(&format!("_{}_\n\n", strings.truncated_note));
    }
}
