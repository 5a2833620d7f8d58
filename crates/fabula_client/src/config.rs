//! Configuration for the story service client.

use crate::AzureChatClient;
use derive_getters::Getters;
use fabula_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "FABULA_API_KEY";

fn default_endpoint() -> String {
    "https://fabula.openai.azure.com/openai/deployments/gpt-4o-mini/chat/completions?api-version=2024-02-15-preview"
        .to_string()
}

fn default_deployment() -> String {
    "gpt-4o-mini".to_string()
}

/// Configuration for the story service client.
///
/// The endpoint and deployment come from an optional TOML file; the API
/// key comes only from the process environment. A missing key does not
/// fail loading — callers check [`StoryConfig::validate`] and report.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct StoryConfig {
    /// Chat-completion endpoint URL
    #[serde(default = "default_endpoint")]
    endpoint: String,
    /// Deployment name, used for logging
    #[serde(default = "default_deployment")]
    deployment: String,
    /// API key from the environment; never read from the file
    #[serde(skip, default)]
    api_key: String,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            deployment: default_deployment(),
            api_key: String::new(),
        }
    }
}

impl StoryConfig {
    /// Load configuration from a TOML file, then pick up the API key from
    /// the environment.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        Ok(config.with_env_key())
    }

    /// Load configuration from an optional file path, falling back to the
    /// built-in defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default().with_env_key()),
        }
    }

    /// Fill in the API key from the process environment.
    pub fn with_env_key(mut self) -> Self {
        self.api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
        self
    }

    /// Check that the configuration can authenticate.
    ///
    /// # Errors
    ///
    /// Returns an error when the API key is missing. Callers report this
    /// to the user and continue; requests will fail until the key is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::new(format!(
                "{} is not set; story requests will fail",
                API_KEY_VAR
            )));
        }
        Ok(())
    }

    /// Build a client from this configuration.
    pub fn into_client(self) -> AzureChatClient {
        AzureChatClient::new(self.endpoint, self.api_key, self.deployment)
    }
}
