//! Configuration loading utilities
//!
//! Precedence order, lowest to highest: built-in defaults, configuration
//! file, environment variables.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::{Result, config::Settings};

/// Configuration loader with multiple source support
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Default settings
    defaults: Settings,
}

impl ConfigLoader {
    /// Create new configuration loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path from the `VIMEO_CONFIG` environment
    /// variable or the default location
    ///
    /// Priority:
    /// 1. `VIMEO_CONFIG` environment variable
    /// 2. `~/.config/vimeo-utils/config.toml` (or platform equivalent)
    pub fn config_path() -> Option<std::path::PathBuf> {
        if let Ok(config_path) = std::env::var("VIMEO_CONFIG") {
            let path = std::path::PathBuf::from(config_path);
            if path.exists() {
                debug!("using config file from VIMEO_CONFIG: {:?}", path);
                return Some(path);
            }
            warn!("VIMEO_CONFIG points to non-existent file: {:?}", path);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let default_path = config_dir.join("vimeo-utils").join("config.toml");
            if default_path.exists() {
                debug!("using default config file: {:?}", default_path);
                return Some(default_path);
            }
        }

        debug!("no config file found");
        None
    }

    /// Load configuration from an explicit file, with env overrides
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let mut settings = self.defaults.clone();

        if let Some(path) = config_file {
            if path.exists() {
                info!("loading configuration from file: {:?}", path);
                settings = Settings::from_file(path)?;
            } else {
                warn!("configuration file not found: {:?}, using defaults", path);
            }
        }

        let settings = settings.merge_with_env()?;
        settings.validate()?;

        debug!("configuration loaded");
        Ok(settings)
    }

    /// Load configuration from the discovered file path and environment
    pub fn load_default(&self) -> Result<Settings> {
        let path = Self::config_path();
        self.load(path.as_deref())
    }

    /// Get default configuration
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}
