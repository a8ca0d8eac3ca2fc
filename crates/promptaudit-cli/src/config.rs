//! Configuration management for PromptAudit CLI
//!
//! Stores load delay, generator seed and view preferences in
//! ~/.config/promptaudit/config.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use promptaudit_store::StoreConfig;

use crate::views::View;

const CONFIG_DIR: &str = "promptaudit";
const CONFIG_FILE: &str = "config.toml";

/// Which metrics the dashboard shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsMode {
    /// Counts taken when the data loaded
    #[default]
    Snapshot,
    /// Recomputed from the current collections
    Live,
}

impl std::fmt::Display for MetricsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsMode::Snapshot => write!(f, "snapshot"),
            MetricsMode::Live => write!(f, "live"),
        }
    }
}

impl std::str::FromStr for MetricsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "snapshot" => Ok(MetricsMode::Snapshot),
            "live" => Ok(MetricsMode::Live),
            _ => Err(format!("Unknown metrics mode: {}", s)),
        }
    }
}

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub metrics_mode: MetricsMode,
    #[serde(default)]
    pub default_view: View,
}

fn default_load_delay_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            load_delay_ms: default_load_delay_ms(),
            seed: None,
            metrics_mode: MetricsMode::default(),
            default_view: View::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set one key from its text form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "load_delay_ms" => {
                self.load_delay_ms = value
                    .parse()
                    .with_context(|| format!("Invalid load_delay_ms: {}", value))?;
            }
            "seed" => {
                self.seed = match value {
                    "" | "none" => None,
                    v => Some(v.parse().with_context(|| format!("Invalid seed: {}", v))?),
                };
            }
            "metrics_mode" => {
                self.metrics_mode = value.parse().map_err(anyhow::Error::msg)?;
            }
            "default_view" => {
                self.default_view = value.parse().map_err(anyhow::Error::msg)?;
            }
            _ => bail!("Unknown config key '{}'", key),
        }
        Ok(())
    }

    /// Store settings derived from this config
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            load_delay: Duration::from_millis(self.load_delay_ms),
            seed: self.seed,
        }
    }
}
