use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use shengxiao::card::Theme;
use shengxiao::date::parse_date;
use tracing::info;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "shengxiao.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Svg,
}

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub clock: ClockConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockConfig {
    /// Pinned "today" for age lookups, YYYY-MM-DD.
    #[serde(default)]
    pub today: Option<String>,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse config")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Loads `explicit` if given, else the default file if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    info!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        info!(path = %path.display(), "loading config");
        Self::from_path(&path)
    }

    /// The pinned date, if any.
    pub fn today(&self) -> Result<Option<NaiveDate>> {
        self.clock
            .today
            .as_deref()
            .map(parse_today)
            .transpose()
            .context("clock.today")
    }
}

/// Parses a `--today`-style override; a bad value is a usage error.
pub fn parse_today(raw: &str) -> Result<NaiveDate> {
    parse_date(raw).with_context(|| format!("expected YYYY-MM-DD for today, got {raw:?}"))
}
