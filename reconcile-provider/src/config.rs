//! Provider configuration.

use crate::error::{ProviderError, ProviderResult};
use reconcile_engine::LocatorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Provider-wide settings. Absent keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub locator: LocatorConfig,
    /// `EnvFilter` directive for provider logs.
    pub log_filter: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            locator: LocatorConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl ProviderConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(content: &str) -> ProviderResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ProviderResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> ProviderResult<()> {
        if self.locator.separator.is_empty() {
            return Err(ProviderError::Config(
                "locator.separator must not be empty".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ProviderError::Config("log_filter must not be empty".to_string()));
        }
        Ok(())
    }
}
