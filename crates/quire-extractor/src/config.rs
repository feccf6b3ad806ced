//! Configuration for the review pipeline

use crate::prompt::SUMMARY_SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Pipeline
///
/// Missing keys in a TOML document fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum time for the page fetch (seconds)
    pub fetch_timeout_secs: u64,

    /// Maximum time for the summarization call (seconds)
    pub summarize_timeout_secs: u64,

    /// System instruction sent with the joined reviews
    pub system_prompt: String,
}

impl PipelineConfig {
    /// Get the fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Get the summarization timeout as a Duration
    pub fn summarize_timeout(&self) -> Duration {
        Duration::from_secs(self.summarize_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be greater than 0".to_string());
        }
        if self.summarize_timeout_secs == 0 {
            return Err("summarize_timeout_secs must be greater than 0".to_string());
        }
        if self.system_prompt.trim().is_empty() {
            return Err("system_prompt must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 30,
            summarize_timeout_secs: 300,
            system_prompt: SUMMARY_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Quick preset: give up early on slow pages and models
    pub fn quick() -> Self {
        Self {
            fetch_timeout_secs: 10,
            summarize_timeout_secs: 60,
            ..Self::default()
        }
    }

    /// Patient preset: for large local models on modest hardware
    pub fn patient() -> Self {
        Self {
            fetch_timeout_secs: 60,
            summarize_timeout_secs: 900,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
