// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Quotly bot.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, producing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Quotly configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuotlyConfig {
    /// Bot identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Telegram bot integration settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Quote provider API settings.
    #[serde(default)]
    pub quotes: QuotesConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Per-user quote-fetch rate limit settings.
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

/// Bot identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the bot.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "quotly".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Telegram bot integration configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Telegram Bot API token. `None` disables the Telegram channel.
    #[serde(default)]
    pub bot_token: Option<String>,
}

/// Quote provider API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuotesConfig {
    /// API key for the quote provider. `None` requires the environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Endpoint URL of the quote provider.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Category requested when the user does not name one.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Request timeout in seconds for the provider HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_category: default_category(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.api-ninjas.com/v1/quotes".to_string()
}

fn default_category() -> String {
    "happiness".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("quotly").join("quotly.db"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "quotly.db".to_string())
}

fn default_wal_mode() -> bool {
    true
}

/// Sliding-window rate limit for quote fetches, evaluated per user.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimitConfig {
    /// Maximum fetches admitted per user within the trailing window.
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,

    /// Trailing window length in seconds.
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}

fn default_max_requests() -> usize {
    5
}

fn default_window_secs() -> u64 {
    60
}
