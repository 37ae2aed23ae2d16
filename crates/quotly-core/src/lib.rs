// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Quotly bot.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Quotly workspace. All adapter crates
//! implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::QuotlyError;
pub use types::{
    AdapterType, FavoriteEntry, HealthStatus, InboundMessage, MessageId, OutboundMessage, Quote,
    UserId,
};

// Re-export all adapter traits at crate root.
pub use traits::{ChannelAdapter, FavoritesStore, PluginAdapter, QuoteProvider, StorageAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotly_error_has_all_variants() {
        let _config = QuotlyError::Config("test".into());
        let _storage = QuotlyError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _channel = QuotlyError::Channel {
            message: "test".into(),
            source: None,
        };
        let _provider = QuotlyError::Provider {
            message: "test".into(),
            source: None,
        };
        let _timeout = QuotlyError::Timeout {
            duration: std::time::Duration::from_secs(10),
        };
        let _internal = QuotlyError::Internal("test".into());
    }

    #[test]
    fn adapter_type_round_trips() {
        use std::str::FromStr;

        let variants = [
            AdapterType::Channel,
            AdapterType::Provider,
            AdapterType::Storage,
        ];

        for variant in &variants {
            let s = variant.to_string();
            let parsed = AdapterType::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn adapter_type_serialization() {
        let storage = AdapterType::Storage;
        let json = serde_json::to_string(&storage).expect("should serialize");
        let parsed: AdapterType = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(storage, parsed);
    }

    #[test]
    fn user_id_displays_raw_integer() {
        assert_eq!(UserId(42).to_string(), "42");
        assert_eq!(UserId(-7).to_string(), "-7");
    }

    #[test]
    fn favorite_entry_exposes_quote_payload() {
        let entry = FavoriteEntry {
            user_id: UserId(1),
            text: "Q".into(),
            author: "A".into(),
            category: "C".into(),
            added_at: "2026-01-01T00:00:00Z".into(),
        };
        let quote = entry.quote();
        assert_eq!(quote.text, "Q");
        assert_eq!(quote.author, "A");
        assert_eq!(quote.category, "C");
    }

    #[test]
    fn health_status_variants() {
        let healthy = HealthStatus::Healthy;
        let degraded = HealthStatus::Degraded("slow".into());
        let unhealthy = HealthStatus::Unhealthy("down".into());

        assert_eq!(healthy, HealthStatus::Healthy);
        assert_ne!(degraded, healthy);
        assert_ne!(unhealthy, healthy);
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // If any trait module is missing or fails to compile, this won't build.
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_channel_adapter<T: ChannelAdapter>() {}
        fn _assert_quote_provider<T: QuoteProvider>() {}
        fn _assert_storage_adapter<T: StorageAdapter>() {}
        fn _assert_favorites_store<T: FavoritesStore>() {}
    }
}
