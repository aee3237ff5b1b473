//! Settings tree
//!
//! Loaded from a TOML file and/or environment variables. The environment
//! variable names match the ones the original integration harness used
//! (`VIMEO_ACCESS_TOKEN`, `VIMEO_CLIENT_ID`, `VIMEO_CLIENT_SECRET`,
//! `VIMEO_USER_ID`).

use serde::{Deserialize, Serialize};

use crate::transport::http::DEFAULT_BASE_URL;

// Helper functions for serde defaults
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("vimeo-utils/{}", env!("CARGO_PKG_VERSION"))
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_request_timeout() -> u64 {
    30
}

fn default_list_timeout() -> u64 {
    60
}

fn default_poll_interval() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Main configuration for the Vimeo API wrapper
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// API credentials
    #[serde(default)]
    pub credentials: CredentialSettings,
    /// Endpoint and timeout configuration
    #[serde(default)]
    pub api: ApiSettings,
    /// Availability polling configuration
    #[serde(default)]
    pub polling: PollingSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// OAuth2 credentials
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CredentialSettings {
    /// Personal access token used as the bearer token
    #[serde(default)]
    pub access_token: String,
    /// OAuth client id; unused for token auth but kept alongside the token
    #[serde(default)]
    pub client_id: Option<String>,
    /// OAuth client secret
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Numeric id of the user the client operates on; absent means `/me`
    #[serde(default)]
    pub user_id: Option<u64>,
}

/// Endpoint and timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Default request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Timeout for listing requests in seconds (large pages are slow)
    #[serde(default = "default_list_timeout")]
    pub list_timeout: u64,
}

/// Availability polling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingSettings {
    /// Seconds between status polls
    #[serde(default = "default_poll_interval")]
    pub interval_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
            list_timeout: default_list_timeout(),
        }
    }
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_poll_interval(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables only
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Load settings from a TOML configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::config("file", format!("failed to read config: {}", e)))?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Apply environment variable overrides onto these settings
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(token) = std::env::var("VIMEO_ACCESS_TOKEN") {
            self.credentials.access_token = token;
        }
        if let Ok(client_id) = std::env::var("VIMEO_CLIENT_ID") {
            self.credentials.client_id = Some(client_id);
        }
        if let Ok(client_secret) = std::env::var("VIMEO_CLIENT_SECRET") {
            self.credentials.client_secret = Some(client_secret);
        }
        if let Ok(user_id) = std::env::var("VIMEO_USER_ID") {
            self.credentials.user_id = Some(user_id.parse().map_err(|e| {
                crate::Error::config("VIMEO_USER_ID", format!("invalid user id: {}", e))
            })?);
        }
        if let Ok(base_url) = std::env::var("VIMEO_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(self)
    }

    /// Validate the final configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.credentials.access_token.is_empty() {
            return Err(crate::Error::config(
                "credentials.access_token",
                "access token must not be empty",
            ));
        }
        url::Url::parse(&self.api.base_url)
            .map_err(|e| crate::Error::config("api.base_url", format!("invalid URL: {}", e)))?;
        if self.polling.interval_secs == 0 {
            return Err(crate::Error::config(
                "polling.interval_secs",
                "poll interval must be at least one second",
            ));
        }
        Ok(())
    }
}
