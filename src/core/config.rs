// src/core/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use tracing::info;

use super::config_loader::user_config_path;

// Built-in defaults reproduce the stock display exactly; the user file only
// ever overrides them, it is never required.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub battery: BatteryConfig,

    #[serde(default)]
    pub urgency: UrgencyConfig,

    #[serde(default)]
    pub colors: ColorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            battery: BatteryConfig::default(),
            urgency: UrgencyConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BatteryConfig {
    // Exact power-supply entry name (e.g. "BAT1"); None means scan for one
    #[serde(default)]
    pub device: Option<String>,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        BatteryConfig { device: None }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UrgencyConfig {
    pub threshold_percent: u8,
}

impl Default for UrgencyConfig {
    fn default() -> Self {
        UrgencyConfig {
            threshold_percent: 8,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ColorConfig {
    pub charging: String,
    pub critical: String,
    pub low: String,
    pub warn: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig {
            charging: "#378c1a".to_string(),
            critical: "#ff0000".to_string(),
            low: "#ffae00".to_string(),
            warn: "#fff600".to_string(),
        }
    }
}

impl Config {
    // Loads built-in defaults and then overrides with user config, if present
    pub fn load() -> Result<Self> {
        let user = user_config_path();
        info!(path = ?user, "Loading configuration");

        // 1. Start from the built-in defaults
        let mut cfg = Config::default();

        // 2. If user config exists, replace with its contents
        if user.exists() {
            info!(path = ?user, "Overlaying user configuration");
            let overlay = fs::read_to_string(&user)
                .with_context(|| format!("Reading user config at {user:?}"))?;
            cfg = toml::from_str(&overlay).context("Parsing user config")?;
        } else {
            info!(path = ?user, "No user config found; using defaults");
        }

        // 3. Validate config values
        if cfg.urgency.threshold_percent > 100 {
            Err(anyhow::anyhow!(
                "urgency.threshold_percent must be at most 100"
            ))?
        }

        info!(?cfg, "Configuration loaded succesfully");
        Ok(cfg)
    }
}
