// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Quotly bot.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Opaque user identifier supplied by the messaging platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a delivered message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

/// A quote as fetched from the provider and stored in favorites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote body. Exact text is the identity of a favorite.
    pub text: String,
    pub author: String,
    pub category: String,
}

/// A persisted favorite row. `(user_id, text)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub user_id: UserId,
    pub text: String,
    pub author: String,
    pub category: String,
    /// RFC 3339 insertion timestamp.
    pub added_at: String,
}

impl FavoriteEntry {
    /// The quote payload of this favorite, without persistence metadata.
    pub fn quote(&self) -> Quote {
        Quote {
            text: self.text.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
        }
    }
}

/// An inbound message received from a channel adapter.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// Platform message identifier.
    pub id: String,
    /// Channel adapter name that produced this message.
    pub channel: String,
    /// Sender's platform user identifier.
    pub user_id: UserId,
    /// Chat the reply should be delivered to.
    pub chat_id: String,
    /// Raw message text (command plus arguments).
    pub text: String,
    /// RFC 3339 receive timestamp.
    pub timestamp: String,
}

/// An outbound plain-text reply to be sent via a channel adapter.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub chat_id: String,
    pub text: String,
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter behind a trait object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Channel,
    Provider,
    Storage,
}
