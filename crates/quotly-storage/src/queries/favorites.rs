// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Favorites CRUD operations.
//!
//! Duplicate inserts and missed deletes are ordinary boolean outcomes; only
//! I/O failures surface as errors. The `(user_id, quote)` primary key is the
//! sole uniqueness enforcement -- no check-then-insert.

use quotly_core::QuotlyError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{FavoriteEntry, Quote, UserId};

/// Insert a favorite. Returns `false` when the `(user_id, quote)` pair
/// already exists, leaving the stored row untouched.
pub async fn add_favorite(db: &Database, entry: &FavoriteEntry) -> Result<bool, QuotlyError> {
    let entry = entry.clone();
    db.connection()
        .call(move |conn| {
            let result = conn.execute(
                "INSERT INTO favorites (user_id, quote, author, category, added_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    entry.user_id.0,
                    entry.text,
                    entry.author,
                    entry.category,
                    entry.added_at,
                ],
            );
            match result {
                Ok(_) => Ok(true),
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    Ok(false)
                }
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List a user's favorites in insertion order. Empty when the user has none.
pub async fn list_favorites(db: &Database, user_id: UserId) -> Result<Vec<Quote>, QuotlyError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT quote, author, category FROM favorites
                 WHERE user_id = ?1 ORDER BY rowid",
            )?;
            let rows = stmt.query_map(params![user_id.0], |row| {
                Ok(Quote {
                    text: row.get(0)?,
                    author: row.get(1)?,
                    category: row.get(2)?,
                })
            })?;
            let mut favorites = Vec::new();
            for row in rows {
                favorites.push(row?);
            }
            Ok(favorites)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete the favorite matching `text` exactly. Returns whether a row was
/// removed.
pub async fn remove_favorite(
    db: &Database,
    user_id: UserId,
    text: &str,
) -> Result<bool, QuotlyError> {
    let text = text.to_string();
    db.connection()
        .call(move |conn| {
            let removed = conn.execute(
                "DELETE FROM favorites WHERE user_id = ?1 AND quote = ?2",
                params![user_id.0, text],
            )?;
            Ok(removed > 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
