//! Configuration for the chat-completions client

use crate::openai::DEFAULT_BASE_URL;
use crate::request::ModelParams;
use crate::LlmError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-5-nano";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 1.0;

/// Default timeout for one exchange (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the chat-completions client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API base URL; `/chat/completions` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Chat model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum time for one exchange (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl LlmConfig {
    /// Get the exchange timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validated model parameters for an exchange
    pub fn model_params(&self) -> Result<ModelParams, LlmError> {
        ModelParams::new(self.model.clone(), self.temperature)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.base_url.trim().is_empty() {
            return Err(LlmError::Config("base_url must not be empty".to_string()));
        }
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            LlmError::Config(format!("base_url {:?} is not a valid URL: {}", self.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LlmError::Config(format!(
                "base_url must use http or https, got {:?}",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 {
            return Err(LlmError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        self.model_params()
            .map(|_| ())
            .map_err(|e| LlmError::Config(e.to_string()))
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, LlmError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| LlmError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, LlmError> {
        toml::to_string_pretty(self)
            .map_err(|e| LlmError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
