use crate::error::{EcotraceError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided programmatically by the embedding application
    Override,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Override => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered client configuration
///
/// Values resolve with precedence Default < File < Environment < Override.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, without a trailing slash
    pub api_base_url: ConfigValue<String>,
    /// Bound on each submission round-trip, in seconds
    pub request_timeout_secs: ConfigValue<u64>,
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            api_base_url: ConfigValue::new(
                "http://localhost:8000/api".to_string(),
                ConfigSource::Default,
            ),
            request_timeout_secs: ConfigValue::new(10, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| EcotraceError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| EcotraceError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(api_base_url) = file_config.api_base_url {
            self.api_base_url.update(api_base_url, ConfigSource::File);
        }

        if let Some(timeout) = file_config.request_timeout_secs {
            if timeout == 0 {
                return Err(EcotraceError::ConfigInvalid {
                    key: "request_timeout_secs".to_string(),
                    reason: "timeout must be greater than zero".to_string(),
                });
            }
            self.request_timeout_secs.update(timeout, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // ECOTRACE_API_BASE_URL
        if let Ok(api_base_url) = env::var("ECOTRACE_API_BASE_URL") {
            self.api_base_url.update(api_base_url, ConfigSource::Environment);
        }

        // ECOTRACE_REQUEST_TIMEOUT_SECS
        if let Ok(timeout_str) = env::var("ECOTRACE_REQUEST_TIMEOUT_SECS") {
            match timeout_str.parse::<u64>() {
                Ok(timeout) if timeout > 0 => {
                    self.request_timeout_secs.update(timeout, ConfigSource::Environment);
                }
                _ => tracing::warn!(
                    "Invalid ECOTRACE_REQUEST_TIMEOUT_SECS value '{}': expected positive integer seconds",
                    timeout_str
                ),
            }
        }

        self
    }

    /// Apply programmatic overrides from the embedding application
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(api_base_url) = overrides.api_base_url {
            self.api_base_url.update(api_base_url, ConfigSource::Override);
        }

        if let Some(timeout) = overrides.request_timeout_secs {
            self.request_timeout_secs.update(timeout, ConfigSource::Override);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "api_base_url".to_string(),
            (self.api_base_url.value.clone(), self.api_base_url.source),
        );

        map.insert(
            "request_timeout_secs".to_string(),
            (self.request_timeout_secs.value.to_string(), self.request_timeout_secs.source),
        );

        map
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Programmatic configuration overrides
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}
