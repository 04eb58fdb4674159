//! Application configuration

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Where account data is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Kept in memory, lost on exit
    Memory,
    /// One JSON file per key under `data_dir`
    #[default]
    File,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            _ => Err(ConfigError::InvalidValue {
                key: "storage",
                value: s.to_string(),
            }),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding persisted account data
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Storage backend
    #[serde(default)]
    pub storage: StorageBackend,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("calmspace")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage: StorageBackend::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file and the
    /// environment (environment wins over file, file over defaults)
    pub fn load() -> ConfigResult<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let mut config = match Self::find_config_file() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;

        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a TOML file; missing fields take defaults
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Apply `CALMSPACE_*` overrides looked up through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("CALMSPACE_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(storage) = lookup("CALMSPACE_STORAGE") {
            self.storage = storage.parse()?;
        }

        if let Some(level) = lookup("CALMSPACE_LOG_LEVEL") {
            self.log_level = level.trim().to_ascii_lowercase();
        }

        Ok(())
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut locations = vec![PathBuf::from("calmspace.toml")];
        if let Some(dir) = dirs::config_dir() {
            locations.push(dir.join("calmspace").join("config.toml"));
        }

        locations.into_iter().find(|p| p.exists())
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "log_level",
                value: self.log_level.clone(),
            });
        }

        if self.storage == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "data_dir",
                value: String::new(),
            });
        }

        if self.storage == StorageBackend::Memory {
            tracing::warn!("Using in-memory storage, account data will not survive a restart");
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
