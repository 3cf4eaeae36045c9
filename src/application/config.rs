use crate::application::Theme;
use crate::domain::{
    DEFAULT_DEPOSIT_PERCENT, DEFAULT_NIGHTLY_RATE, DEFAULT_UNAVAILABLE_DATES, MAX_DEPOSIT_PERCENT,
    Pricing, UnavailableDates,
};
use anyhow::{Context, Result, bail};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub nightly_rate: u64,
    pub deposit_percent: u32,
    /// `YYYY-MM-DD` strings
    pub unavailable_dates: Vec<String>,
    /// Where a confirmed booking is handed off to
    pub confirmation_target: String,
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nightly_rate: DEFAULT_NIGHTLY_RATE,
            deposit_percent: DEFAULT_DEPOSIT_PERCENT,
            unavailable_dates: DEFAULT_UNAVAILABLE_DATES
                .iter()
                .map(|d| d.to_string())
                .collect(),
            confirmation_target: "thanks.html".to_string(),
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    /// `$VILLA_CONFIG`, falling back to the per-user config directory.
    pub fn default_path() -> PathBuf {
        std::env::var("VILLA_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("villa-booking")
                    .join("config.json")
            })
    }

    pub fn from_env() -> Result<Self> {
        Self::load(Self::default_path())
    }

    /// Read `path`, or use the defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the widget cannot work with. An unknown theme only warns.
    pub fn validate(&self) -> Result<()> {
        if self.deposit_percent > MAX_DEPOSIT_PERCENT {
            bail!(
                "deposit_percent must be at most {}, got {}",
                MAX_DEPOSIT_PERCENT,
                self.deposit_percent
            );
        }
        self.unavailable()?;

        let themes = Theme::available_themes();
        if !themes.iter().any(|t| t.eq_ignore_ascii_case(&self.theme)) {
            warn!(
                "Unknown theme '{}', falling back to dark (available: {})",
                self.theme,
                themes.join(", ")
            );
        }
        Ok(())
    }

    pub fn pricing(&self) -> Pricing {
        Pricing::new(self.nightly_rate, self.deposit_percent)
    }

    pub fn unavailable(&self) -> Result<UnavailableDates> {
        UnavailableDates::from_iso(&self.unavailable_dates)
    }
}
