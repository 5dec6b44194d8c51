//! Configuration management module
//!
//! TOML-based configuration with a small search order and validation after
//! parse. Everything falls back to defaults so the application starts
//! without a config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Stock backend settings
    pub backend: BackendConfig,
    /// UI configuration
    pub ui: UIConfig,
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./gudang.toml
    /// 2. ~/.config/gudang-tui/config.toml
    /// 3. Default configuration
    pub async fn load() -> AppResult<Self> {
        info!("Loading application configuration");

        if let Ok(config) = Self::load_from_file("./gudang.toml").await {
            info!("Loaded configuration from ./gudang.toml");
            return Ok(config);
        }

        if let Some(config_path) = Self::user_config_path() {
            if let Ok(config) = Self::load_from_file(&config_path).await {
                info!("Loaded configuration from {}", config_path.display());
                return Ok(config);
            }
        }

        info!("Using default configuration");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from: {}", path.display());

        let content = fs::read_to_string(path).await.map_err(AppError::Io)?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::application(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let path = path.as_ref();
        debug!("Saving configuration to: {}", path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(AppError::Io)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::application(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content).await.map_err(AppError::Io)?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> AppResult<()> {
        debug!("Validating configuration");

        if self.backend.base_url.is_empty() {
            return Err(AppError::application("backend.base_url must not be empty"));
        }

        if self.backend.timeout_ms == 0 {
            return Err(AppError::application(
                "backend.timeout_ms must be greater than 0",
            ));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(AppError::application("ui.tick_rate_ms must be greater than 0"));
        }

        debug!("Configuration validation passed");
        Ok(())
    }

    /// Get user configuration file path
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("gudang-tui");
            path.push("config.toml");
            path
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            backend: BackendConfig::default(),
            ui: UIConfig::default(),
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name
    pub name: String,
    /// Debug mode
    pub debug: bool,
    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Gudang TUI".to_string(),
            debug: cfg!(debug_assertions),
            log_level: if cfg!(debug_assertions) {
                "debug"
            } else {
                "info"
            }
            .to_string(),
        }
    }
}

/// Stock backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the stock backend
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl BackendConfig {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3700".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Theme name
    pub theme: String,
    /// Main loop tick rate in milliseconds (drives modal phase timing)
    pub tick_rate_ms: u64,
    /// Enable mouse support
    pub enable_mouse: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            tick_rate_ms: 50,
            enable_mouse: false,
        }
    }
}
