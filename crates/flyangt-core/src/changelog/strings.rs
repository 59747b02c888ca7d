//! Localized string tables for changelog documents

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output language
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    pub fn strings(&self) -> &'static ChangelogStrings {
        match self {
            Language::En => &EN,
            Language::Ru => &RU,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}

/// Every user-visible string of a changelog document
#[derive(Debug)]
pub struct ChangelogStrings {
    pub title: &'static str,
    pub meta_from: &'static str,
    pub meta_to: &'static str,
    pub meta_generated: &'static str,
    pub bucket_added: &'static str,
    pub bucket_changed: &'static str,
    pub bucket_removed: &'static str,
    pub bucket_fixed: &'static str,
    pub bucket_notes: &'static str,
    /// `{path}` is substituted
    pub item_added: &'static str,
    pub item_changed: &'static str,
    pub item_removed: &'static str,
    /// `{n}` is substituted
    pub hint_array: &'static str,
    pub hint_object: &'static str,
    pub truncated_note: &'static str,
    pub no_changes: &'static str,
}

static EN: ChangelogStrings = ChangelogStrings {
    title: "Release notes",
    meta_from: "From",
    meta_to: "To",
    meta_generated: "Generated",
    bucket_added: "Added",
    bucket_changed: "Changed",
    bucket_removed: "Removed",
    bucket_fixed: "Fixed",
    bucket_notes: "Notes",
    item_added: "added {path}",
    item_changed: "updated {path}",
    item_removed: "removed {path}",
    hint_array: "(array, {n} items)",
    hint_object: "(object)",
    truncated_note: "Some items were omitted from this section.",
    no_changes: "No changes between these release candidates.",
};

static RU: ChangelogStrings = ChangelogStrings {
    title: "Заметки о выпуске",
    meta_from: "От",
    meta_to: "До",
    meta_generated: "Сформировано",
    bucket_added: "Добавлено",
    bucket_changed: "Изменено",
    bucket_removed: "Удалено",
    bucket_fixed: "Исправлено",
    bucket_notes: "Примечания",
    item_added: "добавлено {path}",
    item_changed: "изменено {path}",
    item_removed: "удалено {path}",
    hint_array: "(массив, {n} эл.)",
    hint_object: "(объект)",
    truncated_note: "Часть пунктов этого раздела не показана.",
    no_changes: "Между этими кандидатами нет изменений.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Ru);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_templates_carry_placeholders() {
        for lang in [Language::En, Language::Ru] {
            let s = lang.strings();
            assert!(s.item_added.contains("{path}"));
            assert!(s.item_changed.contains("{path}"));
            assert!(s.item_removed.contains("{path}"));
            assert!(s.hint_array.contains("{n}"));
        }
    }
}
