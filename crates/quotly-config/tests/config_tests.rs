// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Quotly configuration system.

use quotly_config::diagnostic::ConfigError;
use quotly_config::model::QuotlyConfig;
use quotly_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_quotly_config() {
    let toml = r#"
[agent]
name = "test-bot"
log_level = "debug"

[telegram]
bot_token = "123:ABC"

[quotes]
api_key = "ninja-key"
base_url = "https://example.test/v1/quotes"
default_category = "success"
timeout_secs = 5

[storage]
database_path = "/tmp/test.db"
wal_mode = false

[rate_limit]
max_requests = 3
window_secs = 30
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-bot");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.telegram.bot_token.as_deref(), Some("123:ABC"));
    assert_eq!(config.quotes.api_key.as_deref(), Some("ninja-key"));
    assert_eq!(config.quotes.base_url, "https://example.test/v1/quotes");
    assert_eq!(config.quotes.default_category, "success");
    assert_eq!(config.quotes.timeout_secs, 5);
    assert_eq!(config.storage.database_path, "/tmp/test.db");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.rate_limit.max_requests, 3);
    assert_eq!(config.rate_limit.window_secs, 30);
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "quotly");
    assert_eq!(config.agent.log_level, "info");
    assert!(config.telegram.bot_token.is_none());
    assert!(config.quotes.api_key.is_none());
    assert_eq!(config.quotes.base_url, "https://api.api-ninjas.com/v1/quotes");
    assert_eq!(config.quotes.default_category, "happiness");
    assert_eq!(config.quotes.timeout_secs, 10);
    assert!(config.storage.wal_mode);
    assert_eq!(config.rate_limit.max_requests, 5);
    assert_eq!(config.rate_limit.window_secs, 60);
}

/// Unknown field in a section produces an error mentioning the bad key.
#[test]
fn unknown_field_produces_error() {
    let toml = r#"
[rate_limit]
max_request = 3
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("max_request"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unknown fields surface as UnknownKey diagnostics with a suggestion.
#[test]
fn unknown_field_gets_suggestion_diagnostic() {
    let toml = r#"
[telegram]
bot_tken = "abc"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { suggestion: Some(s), .. } if s == "bot_token"
    )));
}

/// A later figment layer overrides an earlier one, the way env vars
/// override TOML at runtime.
#[test]
fn later_layer_overrides_quotes_api_key() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let toml_content = r#"
[quotes]
api_key = "from-toml"
"#;

    let config: QuotlyConfig = Figment::new()
        .merge(Serialized::defaults(QuotlyConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("quotes.api_key", "from-env"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.quotes.api_key.as_deref(), Some("from-env"));
}

/// The QUOTLY_TELEGRAM_BOT_TOKEN mapping must produce telegram.bot_token,
/// not telegram.bot.token.
#[test]
fn env_var_mapping_keeps_bot_token_intact() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("QUOTLY_TELEGRAM_BOT_TOKEN", "999:XYZ");
        jail.set_env("QUOTLY_RATE_LIMIT_MAX_REQUESTS", "7");
        let config = quotly_config::load_config().expect("env-only config should load");
        assert_eq!(config.telegram.bot_token.as_deref(), Some("999:XYZ"));
        assert_eq!(config.rate_limit.max_requests, 7);
        Ok(())
    });
}

/// Validation failures from load_and_validate_str carry Validation variants.
#[test]
fn validation_errors_surface_from_entry_point() {
    let toml = r#"
[storage]
database_path = ""
"#;

    let errors = load_and_validate_str(toml).expect_err("empty path should fail");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("database_path")
    )));
}
