//! Configuration management
//!
//! Settings live in `~/.config/invoice-desk/config.toml`.
//! URL priority: CLI argument > config.toml > INVOICE_DESK_URL environment variable > default.

use super::Result;
use crate::error::StorageError;
use dirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const URL_ENV: &str = "INVOICE_DESK_URL";
pub const DEFAULT_URL: &str = "http://localhost:8080";
/// Matches the server's own default `limit`.
pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const DEFAULT_NOTIFICATION_SECS: u64 = 4;
pub const DEFAULT_TIMEOUT_SECS: u64 = crate::api::client::DEFAULT_TIMEOUT_SECS;

const APP_DIR: &str = "invoice-desk";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "invoice-desk.log";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Review service base URL
    pub url: Option<String>,
    /// Invoices per page
    pub page_size: Option<u32>,
    /// How long a dashboard notification stays up
    pub notification_secs: Option<u64>,
    /// Per-request timeout
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse {}: {}", config_path.display(), e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// `~/.config/invoice-desk`
    pub fn config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(home_dir.join(".config").join(APP_DIR))
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Config file inside an explicit directory (`--config-dir`).
    pub fn file_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Dashboard log file next to the config file.
    pub fn log_file_path(config_path: Option<&Path>) -> Option<PathBuf> {
        match config_path.and_then(Path::parent) {
            Some(dir) => Some(dir.join(LOG_FILE)),
            None => Self::config_dir().ok().map(|dir| dir.join(LOG_FILE)),
        }
    }

    /// Stored URL, then the environment variable
    pub fn get_url(&self) -> Option<String> {
        self.url
            .clone()
            .or_else(|| std::env::var(URL_ENV).ok().filter(|s| !s.is_empty()))
    }

    /// URL with the built-in default applied
    pub fn resolved_url(&self) -> String {
        self.get_url().unwrap_or_else(|| DEFAULT_URL.to_string())
    }

    pub fn set_url(&mut self, url: String) {
        self.url = Some(url);
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.filter(|n| *n > 0).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(
            self.notification_secs
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_NOTIFICATION_SECS),
        )
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}
