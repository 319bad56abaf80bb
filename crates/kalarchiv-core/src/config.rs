use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_FILTER_DATE, DEFAULT_INPUT_FILE, DEFAULT_LOG_LEVEL, ENV_PREFIX,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub archive: ArchiveConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveConfig {
    /// Calendar file offered as the default answer to the path prompt.
    pub default_input: PathBuf,
    /// Cutoff date offered as the default answer to the date prompt.
    pub default_filter_date: NaiveDate,
    /// Directory receiving the outputs; the working directory when unset.
    pub output_dir: Option<PathBuf>,
    /// Copy VTIMEZONE definitions into both outputs.
    pub keep_timezones: bool,
}

impl ArchiveConfig {
    /// ## Summary
    /// Returns the directory the outputs are written to.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a config builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be stored.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("archive.default_input", DEFAULT_INPUT_FILE)?
            .set_default("archive.default_filter_date", DEFAULT_FILTER_DATE)?
            .set_default("archive.keep_timezones", false)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }

    /// ## Summary
    /// Loads settings from `kalarchiv.toml` (optional) and `KALARCHIV_*`
    /// environment variables on top of the defaults. Environment variables
    /// take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            // TOML file
            .add_source(File::with_name(CONFIG_FILE_NAME).required(false))
            // Environment, e.g. KALARCHIV_LOGGING__LEVEL=debug
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from the environment, an optional `.env` file and
/// `kalarchiv.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
