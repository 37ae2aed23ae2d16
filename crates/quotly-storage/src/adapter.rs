// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the FavoritesStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use quotly_config::model::StorageConfig;
use quotly_core::types::{FavoriteEntry, Quote, UserId};
use quotly_core::{
    AdapterType, FavoritesStore, HealthStatus, PluginAdapter, QuotlyError, StorageAdapter,
};

use crate::database::Database;
use crate::queries;

/// SQLite-backed favorites store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query module. The database is lazily initialized on the first call
/// to [`StorageAdapter::initialize`].
pub struct SqliteStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    /// Create a new SqliteStorage with the given configuration.
    ///
    /// The database connection is not opened until `initialize` is called.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Returns the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, QuotlyError> {
        self.db.get().ok_or_else(|| QuotlyError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, QuotlyError> {
        let db = self.db()?;
        db.connection()
            .call(|conn| {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), QuotlyError> {
        if let Some(db) = self.db.get() {
            db.connection()
                .call(|conn| {
                    conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                    Ok(())
                })
                .await
                .map_err(crate::database::map_tr_err)?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for SqliteStorage {
    async fn initialize(&self) -> Result<(), QuotlyError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| QuotlyError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), QuotlyError> {
        if let Some(db) = self.db.get() {
            db.close().await?;
        }
        Ok(())
    }
}

#[async_trait]
impl FavoritesStore for SqliteStorage {
    async fn add_favorite(&self, user_id: UserId, quote: &Quote) -> Result<bool, QuotlyError> {
        let entry = FavoriteEntry {
            user_id,
            text: quote.text.clone(),
            author: quote.author.clone(),
            category: quote.category.clone(),
            added_at: chrono::Utc::now().to_rfc3339(),
        };
        queries::favorites::add_favorite(self.db()?, &entry).await
    }

    async fn list_favorites(&self, user_id: UserId) -> Result<Vec<Quote>, QuotlyError> {
        queries::favorites::list_favorites(self.db()?, user_id).await
    }

    async fn remove_favorite(&self, user_id: UserId, text: &str) -> Result<bool, QuotlyError> {
        queries::favorites::remove_favorite(self.db()?, user_id, text).await
    }
}
