use std::env;
use std::fs;
use std::path::Path;

use khabar_core::config::{CleaningConfig, TokenConfig};
use serde::{Deserialize, Serialize};

fn default_server_url() -> String {
    "https://apinp.com".to_string()
}

fn default_api_endpoint() -> String {
    "/news/api.php".to_string()
}

fn default_output_dir() -> String {
    "cleaned_data".to_string()
}

fn default_monitoring_interval() -> u64 {
    300
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Seconds between checks in monitoring mode
    #[serde(default = "default_monitoring_interval")]
    pub monitoring_interval: u64,
    /// Maximum monitoring iterations, `None` for unbounded
    pub max_iterations: Option<u64>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    pub cleaning: CleaningConfig,
    pub preprocessing: TokenConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            api_endpoint: default_api_endpoint(),
            output_dir: default_output_dir(),
            monitoring_interval: default_monitoring_interval(),
            max_iterations: None,
            timeout_seconds: default_timeout_seconds(),
            cleaning: CleaningConfig::default(),
            preprocessing: TokenConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults with environment overrides applied.
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("KHABAR_SERVER_URL") {
            config.server_url = url;
        }
        if let Ok(endpoint) = env::var("KHABAR_API_ENDPOINT") {
            config.api_endpoint = endpoint;
        }
        if let Ok(dir) = env::var("KHABAR_OUTPUT_DIR") {
            config.output_dir = dir;
        }
        if let Some(interval) = env::var("KHABAR_MONITOR_INTERVAL")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.monitoring_interval = interval;
        }
        if let Some(timeout) = env::var("KHABAR_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout_seconds = timeout;
        }

        config
    }

    /// Load from a JSON file. A missing file falls back to [`AppConfig::new`]
    /// with a warning; a malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(data) => {
                let config = serde_json::from_str(&data)?;
                tracing::info!("loaded configuration from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "config file {} not found, using default settings",
                    path.display()
                );
                Ok(Self::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check the configuration before live processing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_url.is_empty() {
            return Err(ConfigError::Invalid("server_url is not set".to_string()));
        }

        let placeholders = ["https://your-news-server.com", "https://example.com"];
        if placeholders.contains(&self.server_url.as_str()) {
            return Err(ConfigError::Invalid(
                "server_url still points at a placeholder".to_string(),
            ));
        }

        if self.cleaning.min_text_length < 1 {
            return Err(ConfigError::Invalid(
                "min_text_length must be at least 1".to_string(),
            ));
        }
        if self.cleaning.min_text_length >= self.cleaning.max_text_length {
            return Err(ConfigError::Invalid(
                "min_text_length must be less than max_text_length".to_string(),
            ));
        }
        if self.preprocessing.min_token_length > self.preprocessing.max_token_length {
            return Err(ConfigError::Invalid(
                "min_token_length must not exceed max_token_length".to_string(),
            ));
        }

        Ok(())
    }

    /// Write a sample configuration for the user to edit.
    pub fn write_sample(path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        fs::write(path, serde_json::to_string_pretty(&Self::default())?)?;
        tracing::info!("sample configuration written to {}", path.display());
        Ok(())
    }
}
