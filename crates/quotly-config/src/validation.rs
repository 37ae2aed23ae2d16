// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths and positive limits.

use crate::diagnostic::ConfigError;
use crate::model::QuotlyConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &QuotlyConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of trace/debug/info/warn/error, got `{}`",
                config.agent.log_level
            ),
        });
    }

    if config.rate_limit.max_requests < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "rate_limit.max_requests must be at least 1, got {}",
                config.rate_limit.max_requests
            ),
        });
    }

    if config.rate_limit.window_secs < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "rate_limit.window_secs must be at least 1, got {}",
                config.rate_limit.window_secs
            ),
        });
    }

    if config.quotes.timeout_secs < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "quotes.timeout_secs must be at least 1, got {}",
                config.quotes.timeout_secs
            ),
        });
    }

    if config.quotes.base_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "quotes.base_url must not be empty".to_string(),
        });
    }

    if let Some(token) = &config.telegram.bot_token
        && token.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "telegram.bot_token must not be empty when set".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = QuotlyConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_database_path_fails_validation() {
        let mut config = QuotlyConfig::default();
        config.storage.database_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("database_path"))));
    }

    #[test]
    fn zero_rate_limit_fails_validation() {
        let mut config = QuotlyConfig::default();
        config.rate_limit.max_requests = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("max_requests"))));
    }

    #[test]
    fn bogus_log_level_fails_validation() {
        let mut config = QuotlyConfig::default();
        config.agent.log_level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))));
    }

    #[test]
    fn empty_bot_token_fails_validation() {
        let mut config = QuotlyConfig::default();
        config.telegram.bot_token = Some("  ".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("bot_token"))));
    }

    #[test]
    fn multiple_errors_are_collected() {
        let mut config = QuotlyConfig::default();
        config.storage.database_path = "".to_string();
        config.rate_limit.window_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
