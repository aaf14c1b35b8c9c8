//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`resort.toml`)
//! 3. Environment variables (`RESORT_*`)
//!
//! ## Example Config File
//! ```toml
//! resort_name = "Mountain Vista Resort"
//! tagline = "Where luxury meets nature"
//! currency_symbol = "$"
//! confirmation_delay_ms = 1500
//! ```
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use resort_core::Money;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Longest cosmetic pause allowed before the confirmation view.
const MAX_CONFIRMATION_DELAY_MS: u64 = 10_000;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shown as the catalog heading.
    pub resort_name: String,

    /// Shown under the heading and in the footer.
    pub tagline: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Cosmetic pause before the confirmation view, in milliseconds.
    pub confirmation_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            resort_name: "Mountain Vista Resort".to_string(),
            tagline: "Where luxury meets nature".to_string(),
            currency_symbol: "$".to_string(),
            confirmation_delay_ms: 1_500,
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// `resort.toml` in the platform config directory.
    ///
    /// - **Linux**: `~/.config/mountain-vista/resort.toml`
    /// - **macOS**: `~/Library/Application Support/com.mountain-vista.resort/resort.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "mountain-vista", "resort")
            .map(|dirs| dirs.config_dir().join("resort.toml"))
    }

    /// Applies `RESORT_*` overrides read through `lookup`.
    ///
    /// ## Environment Variables
    /// - `RESORT_NAME`
    /// - `RESORT_TAGLINE`
    /// - `RESORT_CURRENCY_SYMBOL`
    /// - `RESORT_CONFIRMATION_DELAY_MS`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("RESORT_NAME") {
            self.resort_name = name;
        }

        if let Some(tagline) = lookup("RESORT_TAGLINE") {
            self.tagline = tagline;
        }

        if let Some(symbol) = lookup("RESORT_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(delay) = lookup("RESORT_CONFIRMATION_DELAY_MS") {
            self.confirmation_delay_ms = delay
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RESORT_CONFIRMATION_DELAY_MS".into()))?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resort_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue("resort_name".into()));
        }

        if self.confirmation_delay_ms > MAX_CONFIRMATION_DELAY_MS {
            return Err(ConfigError::InvalidValue("confirmation_delay_ms".into()));
        }

        Ok(())
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }

    /// Formats an amount as `$1275` or `$10.99`; whole amounts drop the cents.
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.cents() < 0 { "-" } else { "" };
        let whole = amount.dollars().abs();

        if amount.cents_part() == 0 {
            format!("{}{}{}", sign, self.currency_symbol, whole)
        } else {
            format!(
                "{}{}{}.{:02}",
                sign,
                self.currency_symbol,
                whole,
                amount.cents_part()
            )
        }
    }
}
