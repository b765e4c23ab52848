//! Configuration management for the SmartFlo CLI
//!
//! Centralizes the CLI's configurable values behind environment variables
//! with sensible defaults.

use std::env;

/// Centralized configuration for the SmartFlo CLI
#[derive(Debug, Clone)]
pub struct SmartFloCliConfig {
    /// Default output format for CLI commands
    pub default_output_format: String,
}

impl SmartFloCliConfig {
    /// Create a new configuration instance with values from environment
    /// variables or sensible defaults if not set
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_output_format: env::var("SMARTFLO_DEFAULT_OUTPUT_FORMAT")
                .unwrap_or_else(|_| "human".to_string()),
        }
    }
}

impl Default for SmartFloCliConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        // Guard against an inherited override from the test environment
        if env::var("SMARTFLO_DEFAULT_OUTPUT_FORMAT").is_err() {
            let config = SmartFloCliConfig::new();
            assert_eq!(config.default_output_format, "human");
        }
    }
}
