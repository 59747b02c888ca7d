//! Declarative changelog configuration

use serde::{Deserialize, Serialize};

/// One changelog group: which diff group feeds it and how
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangelogGroupConfig {
    pub id: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub title: String,
    /// `group_id` of the `DiffGroupReport` this group reads
    pub source_diff_group_id: String,
    /// Path prefixes (or whole path segments) to leave out, case-insensitive
    #[serde(default)]
    pub ignore_paths: Vec<String>,
    /// Route every item to the Notes bucket
    #[serde(default)]
    pub is_notes: bool,
}

impl ChangelogGroupConfig {
    pub fn new(id: &str, title: &str, source: &str) -> Self {
        Self {
            id: id.to_string(),
            enabled: true,
            title: title.to_string(),
            source_diff_group_id: source.to_string(),
            ignore_paths: Vec::new(),
            is_notes: false,
        }
    }

    pub fn ignoring(mut self, prefixes: &[&str]) -> Self {
        self.ignore_paths = prefixes.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn notes(mut self) -> Self {
        self.is_notes = true;
        self
    }
}

fn default_true() -> bool {
    true
}

/// Output formatting knobs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormattingConfig {
    /// Cap applied to each bucket list independently
    pub max_items_per_section: usize,
    /// Substrings that route a `changed` item to Fixed, case-insensitive
    pub fix_hints: Vec<String>,
    /// Render the from/to/generated block in Markdown
    pub include_meta: bool,
    /// Prefix of exported file names
    pub file_prefix: String,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            max_items_per_section: 50,
            fix_hints: vec!["fix".to_string(), "bug".to_string(), "hotfix".to_string()],
            include_meta: true,
            file_prefix: "changelog".to_string(),
        }
    }
}

/// Groups plus formatting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChangelogConfig {
    pub groups: Vec<ChangelogGroupConfig>,
    pub formatting: FormattingConfig,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            groups: vec![
                ChangelogGroupConfig::new("config", "Configuration", "config")
                    .ignoring(&["generatedAt"]),
                ChangelogGroupConfig::new("i18n", "Translations", "i18n"),
                ChangelogGroupConfig::new("release", "Release checklist", "release"),
                ChangelogGroupConfig::new("smoke", "Smoke tests", "smoke"),
                ChangelogGroupConfig::new("gate", "Gate status", "gate").notes(),
            ],
            formatting: FormattingConfig::default(),
        }
    }
}
