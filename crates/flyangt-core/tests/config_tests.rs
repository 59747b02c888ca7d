#![allow(clippy::unwrap_used, clippy::expect_used)]

use flyangt_core::errors::ExErrorKind;
use flyangt_core::rc::{ArtifactKind, RcIdMode};
use flyangt_core::guard::SlidingWindowLimiter;
use flyangt_core::{FixedClock, ToolingConfig};

#[test]
fn test_empty_document_gives_defaults() {
    let config = ToolingConfig::from_toml_str("").unwrap();
    assert_eq!(config, ToolingConfig::default());
    assert_eq!(config.rc.max_records, 20);
    assert_eq!(config.rc.id_prefix, "RC");
    assert_eq!(config.changelog.formatting.max_items_per_section, 50);
    assert_eq!(config.retention.max_apply, 500);
    assert_eq!(config.changelog.groups.len(), 5);
}

#[test]
fn test_partial_sections_override() {
    let raw = r#"
[rc]
id_mode = "random"
max_records = 5

[[rc.diff_groups]]
id = "config"
artifact = "snapshot"
path = "configs"

[changelog.formatting]
fix_hints = ["patch"]

[[changelog.groups]]
id = "config"
title = "Config"
source_diff_group_id = "config"

[retention]
max_apply = 10

[[retention.age_buckets]]
label = "all"
min_days = 0
"#;
    let config = ToolingConfig::from_toml_str(raw).unwrap();
    assert_eq!(config.rc.id_mode, RcIdMode::Random);
    assert_eq!(config.rc.max_records, 5);
    assert_eq!(config.rc.max_diff_items, 200);
    assert_eq!(config.rc.diff_groups.len(), 1);
    assert_eq!(config.rc.diff_groups[0].artifact, ArtifactKind::Snapshot);
    assert_eq!(config.changelog.formatting.fix_hints, vec!["patch".to_string()]);
    assert!(config.changelog.formatting.include_meta);
    assert!(config.changelog.groups[0].enabled);
    assert_eq!(config.retention.age_buckets.len(), 1);
    assert_eq!(config.retention.preview_limit, 20);
}

#[test]
fn test_validation_failures() {
    let cases = [
        ("[rc]\nmax_records = 0", "rc.max_records"),
        ("[retention]\nmax_apply = 0", "retention.max_apply"),
        (
            "[changelog.formatting]\nmax_items_per_section = 0",
            "max_items_per_section",
        ),
        ("[rc]\nid_prefix = \"  \"", "id_prefix must not be empty"),
        ("[rate_limit]\nwindow_secs = 0", "rate_limit.window_secs"),
        (
            "[[retention.age_buckets]]\nlabel = \"x\"\nmin_days = 10\nmax_days = 5",
            "max_days below min_days",
        ),
        (
            "[[changelog.groups]]\nid = \"a\"\ntitle = \"A\"\nsource_diff_group_id = \"a\"\n[[changelog.groups]]\nid = \"a\"\ntitle = \"B\"\nsource_diff_group_id = \"b\"",
            "duplicate id 'a' in changelog.groups",
        ),
        ("[rc]\nid_mode = \"sequential\"", "unknown variant"),
        ("not toml at all [", "TOML parse error"),
    ];
    for (raw, cause) in cases {
        let err = ToolingConfig::from_toml_str(raw).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig, "input: {}", raw);
        assert!(
            err.message().contains(cause),
            "input: {} gave {}",
            raw,
            err.message()
        );
    }
}

#[test]
fn test_age_buckets_use_snake_case_keys() {
    let raw = r#"
[[retention.age_buckets]]
label = "fresh"
min_days = 0
max_days = 7

[[retention.age_buckets]]
label = "stale"
min_days = 8
"#;
    let config = ToolingConfig::from_toml_str(raw).unwrap();
    let buckets = &config.retention.age_buckets;
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].label, "fresh");
    assert_eq!(buckets[0].max_days, Some(7));
    assert!(buckets[1].contains(10_000));
}

#[test]
fn test_load_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = ToolingConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ToolingConfig::default());
}

#[test]
fn test_load_reports_path_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flyangt.toml");
    std::fs::write(&path, "[rc]\nmax_records = 0\n").unwrap();
    let err = ToolingConfig::load(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    assert!(err.entity_id().unwrap().ends_with("flyangt.toml"));
}

#[test]
fn test_rate_limit_section_drives_limiter() {
    let config = ToolingConfig::from_toml_str("[rate_limit]\nwindow_secs = 30\nmax_hits = 2\n").unwrap();
    assert_eq!(config.rate_limit.window_secs, 30);

    let clock = FixedClock::new(chrono::Utc::now());
    let mut limiter = SlidingWindowLimiter::new(config.rate_limit, &clock);
    assert!(limiter.check("203.0.113.7").allowed);
    assert!(limiter.check("203.0.113.7").allowed);
    let third = limiter.check("203.0.113.7");
    assert!(!third.allowed);
    assert_eq!(third.retry_after_secs, 30);
}
