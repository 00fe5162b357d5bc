//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{num::NonZeroU64, path::Path, str::FromStr};

use clap::{Args, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "labelsite";
const ENV_PREFIX: &str = "LABELSITE";
const DEFAULT_PER_PAGE: u64 = 10;
const DEFAULT_WINDOW: u64 = 5;
const MAX_PER_PAGE: u64 = 100;

/// Command-line overrides shared by every binary that loads settings.
#[derive(Debug, Args, Default, Clone)]
pub struct SettingsOverrides {
    /// API base URL, e.g. <https://api.example.com/api>
    #[arg(long = "site", env = "LABELSITE_SITE_URL", value_name = "URL", global = true)]
    pub site: Option<String>,

    /// Override the default page size of list views.
    #[arg(long = "per-page", value_name = "COUNT", global = true)]
    pub per_page: Option<u64>,

    /// Override how many page numbers the pager shows around the current page.
    #[arg(long = "pager-window", value_name = "COUNT", global = true)]
    pub window: Option<u64>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub site: SiteSettings,
    pub listing: ListingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ListingSettings {
    pub per_page: NonZeroU64,
    pub window: usize,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(
    config_file: Option<&Path>,
    overrides: &SettingsOverrides,
) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(overrides);
    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    site: RawSiteSettings,
    listing: RawListingSettings,
    logging: RawLoggingSettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(site) = overrides.site.as_ref() {
            self.site.base_url = Some(site.clone());
        }
        if let Some(per_page) = overrides.per_page {
            self.listing.per_page = Some(per_page);
        }
        if let Some(window) = overrides.window {
            self.listing.window = Some(window);
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            site,
            listing,
            logging,
        } = raw;

        Ok(Self {
            site: build_site_settings(site),
            listing: build_listing_settings(listing)?,
            logging: build_logging_settings(logging)?,
        })
    }
}

fn build_site_settings(site: RawSiteSettings) -> SiteSettings {
    let base_url = site.base_url.and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    });
    SiteSettings { base_url }
}

/// Validate a page size coming from `key`; accepts `1..=MAX_PER_PAGE`.
pub fn page_size(key: &'static str, value: u64) -> Result<NonZeroU64, LoadError> {
    if value > MAX_PER_PAGE {
        return Err(LoadError::invalid(
            key,
            format!("must not exceed {MAX_PER_PAGE}"),
        ));
    }
    NonZeroU64::new(value).ok_or_else(|| LoadError::invalid(key, "must be greater than zero"))
}

fn build_listing_settings(listing: RawListingSettings) -> Result<ListingSettings, LoadError> {
    let per_page = page_size(
        "listing.per_page",
        listing.per_page.unwrap_or(DEFAULT_PER_PAGE),
    )?;

    let window_value = listing.window.unwrap_or(DEFAULT_WINDOW);
    if window_value == 0 {
        return Err(LoadError::invalid(
            "listing.window",
            "must be greater than zero",
        ));
    }
    let window = usize::try_from(window_value).map_err(|_| {
        LoadError::invalid("listing.window", "value exceeds supported range for usize")
    })?;

    Ok(ListingSettings { per_page, window })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSiteSettings {
    base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawListingSettings {
    per_page: Option<u64>,
    window: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[cfg(test)]
mod tests;
