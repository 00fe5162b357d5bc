use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;

use super::*;

#[derive(Debug, Parser)]
struct Harness {
    #[command(flatten)]
    overrides: SettingsOverrides,
}

#[test]
fn defaults_apply_without_sources() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.listing.per_page.get(), DEFAULT_PER_PAGE);
    assert_eq!(settings.listing.window, 5);
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert!(settings.site.base_url.is_none());
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.listing.per_page = Some(20);
    raw.logging.level = Some("info".to_string());

    let overrides = SettingsOverrides {
        per_page: Some(12),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.listing.per_page.get(), 12);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn zero_page_size_is_rejected() {
    let mut raw = RawSettings::default();
    raw.listing.per_page = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero page size");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "listing.per_page",
            ..
        }
    ));
}

#[test]
fn oversized_page_size_is_rejected() {
    let mut raw = RawSettings::default();
    raw.listing.per_page = Some(MAX_PER_PAGE + 1);
    assert!(Settings::from_raw(raw).is_err());
}

#[test]
fn page_size_bounds_name_the_offending_key() {
    assert_eq!(page_size("--limit", MAX_PER_PAGE).map(NonZeroU64::get).ok(), Some(MAX_PER_PAGE));
    match page_size("--limit", 100_000) {
        Err(LoadError::Invalid { key, reason }) => {
            assert_eq!(key, "--limit");
            assert!(reason.contains("100"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(page_size("--limit", 0).is_err());
}

#[test]
fn blank_site_is_treated_as_missing() {
    let mut raw = RawSettings::default();
    raw.site.base_url = Some("   ".to_string());
    let settings = Settings::from_raw(raw).expect("valid settings");
    assert!(settings.site.base_url.is_none());
}

#[test]
fn cli_json_logging_enforces_format() {
    let args = Harness::parse_from(["labelsite", "--log-json", "yes", "--pager-window", "7"]);
    let mut raw = RawSettings::default();
    raw.apply_overrides(&args.overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
    assert_eq!(settings.listing.window, 7);
}

#[test]
fn explicit_config_file_is_loaded() {
    let mut file = NamedTempFile::with_suffix(".toml").expect("tmp config");
    writeln!(
        file,
        "[site]\nbase_url = \"https://api.example.com/api\"\n\n[listing]\nper_page = 9"
    )
    .expect("write config");

    let settings =
        load(Some(file.path()), &SettingsOverrides::default()).expect("settings from file");

    assert_eq!(
        settings.site.base_url.as_deref(),
        Some("https://api.example.com/api")
    );
    assert_eq!(settings.listing.per_page.get(), 9);
}

#[test]
fn invalid_log_level_is_reported() {
    let overrides = SettingsOverrides {
        log_level: Some("chatty".to_string()),
        ..Default::default()
    };
    let mut raw = RawSettings::default();
    raw.apply_overrides(&overrides);

    let err = Settings::from_raw(raw).expect_err("invalid level");
    assert!(err.to_string().contains("logging.level"));
}
