//! Configuration for the analysis parser

use serde::{Deserialize, Serialize};

/// Configuration for [`AnalysisParser`](crate::AnalysisParser)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Maximum accepted input length (characters)
    ///
    /// A completion is bounded by the model's output window, so anything
    /// past this limit is runaway input. It is truncated, never rejected:
    /// the engine has no fatal-error category.
    pub max_text_length: usize,

    /// Additional conclusion-leak lead-in patterns
    ///
    /// Regex sources applied after the built-in cleanup rules, both
    /// document-wide and per line. Lets the hosting application strip
    /// lead-ins specific to its own prompt wording without a new release.
    pub extra_leak_patterns: Vec<String>,
}

impl ParserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        for pattern in &self.extra_leak_patterns {
            if let Err(e) = regex::Regex::new(pattern) {
                return Err(format!("invalid pattern '{}': {}", pattern, e));
            }
        }
        Ok(())
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

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_text_length: 100_000,
            extra_leak_patterns: Vec::new(),
        }
    }
}
