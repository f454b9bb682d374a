use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

use crate::{search::SearchTimings, theme::Theme};

/// Optional settings read from `config.toml`.
///
/// Example TOML:
/// ```toml
/// theme = "dark"
/// search_delay_ms = 1000
/// blur_delay_ms = 200
/// log_level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub search_delay_ms: u64,
    pub blur_delay_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let timings = SearchTimings::default();
        Self {
            theme: Theme::default(),
            search_delay_ms: timings.search_delay.as_millis() as u64,
            blur_delay_ms: timings.blur_delay.as_millis() as u64,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or defaults if there is none.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-stories", "weather-stories")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn timings(&self) -> SearchTimings {
        SearchTimings {
            search_delay: Duration::from_millis(self.search_delay_ms),
            blur_delay: Duration::from_millis(self.blur_delay_ms),
        }
    }
}
