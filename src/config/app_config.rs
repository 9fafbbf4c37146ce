//! Application configuration

use super::{default_data_dir, Migrate};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Config schema version
    pub version: u32,

    /// Data directory path
    pub data_dir: PathBuf,

    /// Logging level
    pub log_level: String,

    /// Base URL password-reset links point at
    pub frontend_url: String,

    /// Lifetime of a password-reset token, in minutes
    pub reset_token_ttl_minutes: u64,
}

impl AppConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let data_dir = default_data_dir()?;
        Self::load_from(&data_dir)
    }

    /// Load configuration from a specific data directory
    pub fn load_from(data_dir: &PathBuf) -> Result<Self> {
        let config_path = data_dir.join("investtracker.json");

        if config_path.exists() {
            info!("Loading config from {:?}", config_path);
            let json = fs::read_to_string(&config_path)?;
            let mut config: AppConfig = serde_json::from_str(&json)?;

            if config.version < Self::target_version() {
                info!(
                    "Migrating config from v{} to v{}",
                    config.version,
                    Self::target_version()
                );
                config.migrate()?;
                config.save()?;
            }

            Ok(config)
        } else {
            warn!("No config found, creating default at {:?}", config_path);
            let config = Self::default_with_dir(data_dir.clone());
            config.save()?;
            Ok(config)
        }
    }

    /// Load or create configuration
    pub fn load_or_create(data_dir: &PathBuf) -> Result<Self> {
        Self::load_from(data_dir).or_else(|_| {
            let config = Self::default_with_dir(data_dir.clone());
            config.save()?;
            Ok(config)
        })
    }

    /// Create default configuration with specific data directory
    pub fn default_with_dir(data_dir: PathBuf) -> Self {
        Self {
            version: Self::target_version(),
            data_dir,
            log_level: "info".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            reset_token_ttl_minutes: 60,
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        let config_path = self.data_dir.join("investtracker.json");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;
        info!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// Path of the sqlite database file
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("investtracker.db")
    }

    /// Path of the logs directory
    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = default_data_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::default_with_dir(data_dir)
    }
}

impl Migrate for AppConfig {
    fn current_version(&self) -> u32 {
        self.version
    }

    fn target_version() -> u32 {
        1
    }

    fn migrate(&mut self) -> Result<()> {
        match self.version {
            0 => {
                self.version = 1;
                Ok(())
            }
            1 => Ok(()),
            v => Err(anyhow!("Unknown config version: {}", v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default_with_dir(dir.path().to_path_buf());
        config.frontend_url = "https://inspections.example".to_string();
        config.save().unwrap();

        let loaded = AppConfig::load_from(&dir.path().to_path_buf()).unwrap();
        assert_eq!(loaded.frontend_url, "https://inspections.example");
        assert_eq!(loaded.version, AppConfig::target_version());
    }

    #[test]
    fn creates_default_when_missing() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().to_path_buf()).unwrap();
        assert_eq!(config.reset_token_ttl_minutes, 60);
        assert!(dir.path().join("investtracker.json").exists());
    }
}
