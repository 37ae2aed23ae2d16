// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory favorites store for dispatcher tests.
//!
//! Implements the same add/list/remove contract as the SQLite store,
//! plus a switch to simulate storage I/O failures.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use quotly_core::traits::adapter::PluginAdapter;
use quotly_core::traits::storage::{FavoritesStore, StorageAdapter};
use quotly_core::types::{AdapterType, FavoriteEntry, HealthStatus, Quote, UserId};
use quotly_core::QuotlyError;

/// A favorites store held in a Vec, preserving insertion order.
#[derive(Default)]
pub struct MemoryFavorites {
    rows: Mutex<Vec<FavoriteEntry>>,
    failing: AtomicBool,
}

impl MemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every store operation returns a storage error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    fn check_failing(&self) -> Result<(), QuotlyError> {
        if self.failing.load(Ordering::Relaxed) {
            Err(QuotlyError::Storage {
                source: "scripted storage failure".into(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PluginAdapter for MemoryFavorites {
    fn name(&self) -> &str {
        "memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, QuotlyError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), QuotlyError> {
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for MemoryFavorites {
    async fn initialize(&self) -> Result<(), QuotlyError> {
        Ok(())
    }

    async fn close(&self) -> Result<(), QuotlyError> {
        Ok(())
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavorites {
    async fn add_favorite(&self, user_id: UserId, quote: &Quote) -> Result<bool, QuotlyError> {
        self.check_failing()?;
        let mut rows = self.rows.lock().await;
        if rows
            .iter()
            .any(|r| r.user_id == user_id && r.text == quote.text)
        {
            return Ok(false);
        }
        rows.push(FavoriteEntry {
            user_id,
            text: quote.text.clone(),
            author: quote.author.clone(),
            category: quote.category.clone(),
            added_at: chrono::Utc::now().to_rfc3339(),
        });
        Ok(true)
    }

    async fn list_favorites(&self, user_id: UserId) -> Result<Vec<Quote>, QuotlyError> {
        self.check_failing()?;
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.quote())
            .collect())
    }

    async fn remove_favorite(&self, user_id: UserId, text: &str) -> Result<bool, QuotlyError> {
        self.check_failing()?;
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| !(r.user_id == user_id && r.text == text));
        Ok(rows.len() < before)
    }
}
