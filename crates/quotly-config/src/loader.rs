// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./quotly.toml` > `~/.config/quotly/quotly.toml` > `/etc/quotly/quotly.toml`
//! with environment variable overrides via `QUOTLY_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::QuotlyConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/quotly/quotly.toml` (system-wide)
/// 3. `~/.config/quotly/quotly.toml` (user XDG config)
/// 4. `./quotly.toml` (local directory)
/// 5. `QUOTLY_*` environment variables
pub fn load_config() -> Result<QuotlyConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QuotlyConfig::default()))
        .merge(Toml::file("/etc/quotly/quotly.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("quotly/quotly.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("quotly.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<QuotlyConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QuotlyConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<QuotlyConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QuotlyConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `QUOTLY_TELEGRAM_BOT_TOKEN` must map to
/// `telegram.bot_token`, not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("QUOTLY_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: QUOTLY_QUOTES_API_KEY -> "quotes_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("rate_limit_", "rate_limit.", 1)
            .replacen("agent_", "agent.", 1)
            .replacen("telegram_", "telegram.", 1)
            .replacen("quotes_", "quotes.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
