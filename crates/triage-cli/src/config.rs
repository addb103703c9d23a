//! TOML-based CLI preferences.
//!
//! Stored at `~/.config/triage/config.toml`. Holds transport-level defaults
//! only; task records never persist anywhere.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use triage_core::Strategy;

fn default_strategy() -> String {
    "smart".to_string()
}

/// CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Strategy used when neither the `--strategy` flag nor the payload
    /// envelope names one.
    #[serde(default = "default_strategy")]
    pub default_strategy: String,
    /// Pretty-print JSON output by default.
    #[serde(default)]
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_strategy: default_strategy(),
            pretty: false,
        }
    }
}

impl CliConfig {
    /// Config file path (`~/.config/triage/config.toml`).
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("triage")
            .join("config.toml")
    }

    /// Load the config, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::path()) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save the config, creating the parent directory if needed.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The configured default strategy, parsed leniently (unknown values
    /// fall back to smart, like everywhere else).
    pub fn strategy(&self) -> Strategy {
        Strategy::parse(&self.default_strategy)
    }

    /// Get a config value by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_strategy" => Some(self.default_strategy.clone()),
            "pretty" => Some(self.pretty.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "default_strategy" => self.default_strategy = value.to_string(),
            "pretty" => self.pretty = value.parse()?,
            _ => return Err(format!("unknown key: {key}").into()),
        }
        self.save()
    }
}
