// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Converts Figment deserialization errors into miette diagnostics with
//! "did you mean?" suggestions using Jaro-Winkler string similarity.

use miette::Diagnostic;
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// 0.75 catches common typos like `naem` -> `name` while filtering noise.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Every key accepted anywhere in quotly.toml, used for typo suggestions.
const VALID_KEYS: &[&str] = &[
    "agent",
    "name",
    "log_level",
    "telegram",
    "bot_token",
    "quotes",
    "api_key",
    "base_url",
    "default_category",
    "timeout_secs",
    "storage",
    "database_path",
    "wal_mode",
    "rate_limit",
    "max_requests",
    "window_secs",
];

/// A configuration error with diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(quotly::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref()))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
    },

    /// A configuration value has the wrong type.
    #[error("invalid value for key `{key}`: {detail}")]
    #[diagnostic(code(quotly::config::invalid_type))]
    InvalidType {
        /// The key with the wrong type.
        key: String,
        /// Description of the type mismatch.
        detail: String,
    },

    /// A validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(quotly::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(quotly::config::other))]
    Other(String),
}

/// Format the help message for unknown key errors.
fn format_unknown_key_help(suggestion: Option<&str>) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`?"),
        None => "see quotly.toml.example for the full key listing".to_string(),
    }
}

/// Suggest the closest valid key for an unknown one, if any is close enough.
pub fn suggest_key(unknown: &str) -> Option<String> {
    VALID_KEYS
        .iter()
        .map(|valid| (*valid, strsim::jaro_winkler(unknown, valid)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(valid, _)| valid.to_string())
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// A figment error may contain multiple underlying errors; each becomes its
/// own diagnostic. Unknown-field errors get fuzzy match suggestions.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|e| {
            let key = e.path.join(".");
            match &e.kind {
                Kind::UnknownField(field, _) => ConfigError::UnknownKey {
                    suggestion: suggest_key(field),
                    key: if key.is_empty() {
                        field.to_string()
                    } else {
                        format!("{key}.{field}")
                    },
                },
                Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                    key,
                    detail: format!("expected {expected}, found {actual}"),
                },
                Kind::InvalidValue(actual, expected) => ConfigError::InvalidType {
                    key,
                    detail: format!("expected {expected}, found {actual}"),
                },
                Kind::MissingField(field) => ConfigError::Other(format!(
                    "missing required key `{field}`"
                )),
                other => ConfigError::Other(other.to_string()),
            }
        })
        .collect()
}

/// Render diagnostics to stderr via miette's fancy report handler.
pub fn render_errors(errors: &[ConfigError]) {
    for err in errors {
        // Re-wrap each error in a Report so miette renders code and help text.
        let report = miette::Report::msg(format!("{err}"));
        let report = match err {
            ConfigError::UnknownKey { suggestion, .. } => match suggestion {
                Some(s) => report.wrap_err(format!("did you mean `{s}`?")),
                None => report,
            },
            _ => report,
        };
        eprintln!("{report:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_key_catches_close_typo() {
        assert_eq!(suggest_key("naem").as_deref(), Some("name"));
        assert_eq!(suggest_key("bot_tken").as_deref(), Some("bot_token"));
        assert_eq!(suggest_key("max_request").as_deref(), Some("max_requests"));
    }

    #[test]
    fn suggest_key_rejects_noise() {
        assert_eq!(suggest_key("xyzzy"), None);
    }
}
