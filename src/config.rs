//! Top-level application configuration.
//!
//! Configuration is stored as YAML, by default in the platform config
//! directory (`confticket/config.yaml`). `CONFTICKET_CONFIG` overrides the
//! location. It only carries presentation details of the event; the avatar
//! acceptance rules are fixed.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfTicketError, Result};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "CONFTICKET_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Event shown on the intake screen and printed on tickets
    #[serde(default)]
    pub event: EventConfig,
}

/// Event details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default = "default_event_name")]
    pub name: String,
    #[serde(default = "default_event_location")]
    pub location: String,
    /// Year used in the intake headline
    #[serde(default = "default_event_year")]
    pub year: u16,
}

fn default_event_name() -> String {
    "Coding Conf".to_string()
}

fn default_event_location() -> String {
    "Austin, TX".to_string()
}

fn default_event_year() -> u16 {
    2025
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            name: default_event_name(),
            location: default_event_location(),
            year: default_event_year(),
        }
    }
}

/// Keys accepted by `config get` / `config set`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    EventName,
    EventLocation,
    EventYear,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::EventName,
        ConfigKey::EventLocation,
        ConfigKey::EventYear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::EventName => "event.name",
            ConfigKey::EventLocation => "event.location",
            ConfigKey::EventYear => "event.year",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = ConfTicketError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = ConfigKey::ALL.iter().map(|k| k.as_str()).collect();
                ConfTicketError::Config(format!(
                    "unknown config key '{s}' (valid keys: {})",
                    valid.join(", ")
                ))
            })
    }
}

impl Config {
    /// Path of the config file, honoring the environment override
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        directories::ProjectDirs::from("", "", "confticket")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .ok_or_else(|| {
                ConfTicketError::Config("could not determine a config directory".to_string())
            })
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            ConfTicketError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, logging and ignoring a broken file
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e}");
            Config::default()
        })
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfTicketError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        path.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = self.to_yaml()?;
        fs::write(&path, content).map_err(|e| {
            ConfTicketError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::EventName => self.event.name.clone(),
            ConfigKey::EventLocation => self.event.location.clone(),
            ConfigKey::EventYear => self.event.year.to_string(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfTicketError::Config(format!("{key} cannot be empty")));
        }

        match key {
            ConfigKey::EventName => self.event.name = value.to_string(),
            ConfigKey::EventLocation => self.event.location = value.to_string(),
            ConfigKey::EventYear => {
                self.event.year = value.parse().map_err(|_| {
                    ConfTicketError::Config(format!("invalid year '{value}' for {key}"))
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_event() {
        let config = Config::default();
        assert_eq!(config.event.name, "Coding Conf");
        assert_eq!(config.event.location, "Austin, TX");
        assert_eq!(config.event.year, 2025);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml_ng::from_str("event:\n  location: Berlin\n").unwrap();
        assert_eq!(config.event.location, "Berlin");
        assert_eq!(config.event.name, "Coding Conf");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config: Config = serde_yaml_ng::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_yaml_roundtrip_shape() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("name: Coding Conf"));
        assert!(yaml.contains("location: Austin, TX"));
    }

    #[test]
    fn test_config_key_parse() {
        assert_eq!("event.name".parse::<ConfigKey>().unwrap(), ConfigKey::EventName);
        let err = "nope".parse::<ConfigKey>().unwrap_err();
        assert!(err.to_string().contains("unknown config key"));
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set(ConfigKey::EventLocation, "Lisbon").unwrap();
        config.set(ConfigKey::EventYear, "2026").unwrap();
        assert_eq!(config.get(ConfigKey::EventLocation), "Lisbon");
        assert_eq!(config.event.year, 2026);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set(ConfigKey::EventName, "  ").is_err());
        assert!(config.set(ConfigKey::EventYear, "next year").is_err());
    }
}
