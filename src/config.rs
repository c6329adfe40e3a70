//! Configuration management for weight-station
//!
//! Config stored at: ~/.config/weight-station/config.json

use crate::domain::service::ValidationPolicy;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store directory override
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Which fields are mandatory at save time (lenient, strict)
    #[serde(default)]
    pub validation: ValidationPolicy,

    /// Number of rows shown in the recent-entries table
    #[serde(default = "default_recent_rows")]
    pub recent_rows: usize,
}

fn default_recent_rows() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            validation: ValidationPolicy::default(),
            recent_rows: default_recent_rows(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("weight-station");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the store directory path
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let store_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("weight-station");
        Ok(store_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Weight Station Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Validation:  {}", self.validation)?;
        writeln!(f, "Recent rows: {}", self.recent_rows)?;
        writeln!(
            f,
            "Store dir:   {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file: {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.validation, ValidationPolicy::Lenient);
        assert_eq!(config.recent_rows, 5);
        assert!(config.store_dir.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.validation, ValidationPolicy::Lenient);
        assert_eq!(config.recent_rows, 5);
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            validation: ValidationPolicy::Strict,
            recent_rows: 10,
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.validation, ValidationPolicy::Strict);
        assert_eq!(parsed.recent_rows, 10);
    }
}
