// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage adapter traits for persistence backends.

use async_trait::async_trait;

use crate::error::QuotlyError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{Quote, UserId};

/// Lifecycle trait for storage and persistence backends.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the storage backend (migrations, connection setup).
    async fn initialize(&self) -> Result<(), QuotlyError>;

    /// Closes the storage backend, flushing pending writes.
    async fn close(&self) -> Result<(), QuotlyError>;
}

/// Durable, queryable record of each user's favorited quotes.
///
/// The `(user_id, quote text)` pair is unique. Duplicate adds and missed
/// removes are ordinary boolean outcomes, not errors; only storage I/O
/// failures surface as `Err`.
#[async_trait]
pub trait FavoritesStore: StorageAdapter {
    /// Inserts a favorite. Returns `Ok(false)` without overwriting when the
    /// user already favorited this exact text.
    ///
    /// Safe under concurrent calls: the underlying uniqueness constraint is
    /// the sole enforcement mechanism, so racing identical adds yield
    /// exactly one `true`.
    async fn add_favorite(&self, user_id: UserId, quote: &Quote) -> Result<bool, QuotlyError>;

    /// Returns the user's favorites in insertion order. Empty when none.
    async fn list_favorites(&self, user_id: UserId) -> Result<Vec<Quote>, QuotlyError>;

    /// Deletes the favorite matching `text` exactly. Returns whether a row
    /// was removed.
    async fn remove_favorite(&self, user_id: UserId, text: &str) -> Result<bool, QuotlyError>;
}
