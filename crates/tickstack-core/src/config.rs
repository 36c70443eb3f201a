//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - The default category for new timers
//! - Notification preferences
//!
//! Configuration is stored at `~/.config/tickstack/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::store::data_dir;

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Pre-select the halfway alert toggle for newly created timers.
    #[serde(default)]
    pub halfway_default: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/tickstack/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Category assigned when a timer is created with an empty one.
    #[serde(default = "default_category")]
    pub default_category: String,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// Default functions
fn default_true() -> bool {
    true
}
fn default_category() -> String {
    "General".to_string()
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            halfway_default: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            notifications: NotificationsConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.default_category, "General");
        assert!(parsed.notifications.enabled);
        assert!(!parsed.notifications.halfway_default);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.default_category, "General");
        assert!(parsed.notifications.enabled);
    }

    #[test]
    fn partial_config_keeps_overrides() {
        let parsed: Config = toml::from_str("default_category = \"Kitchen\"").unwrap();
        assert_eq!(parsed.default_category, "Kitchen");
        assert!(parsed.notifications.enabled);
    }
}
