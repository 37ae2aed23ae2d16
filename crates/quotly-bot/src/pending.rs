// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-user most-recently-fetched quote, eligible to be favorited.

use dashmap::DashMap;
use quotly_core::{Quote, UserId};

/// Volatile per-user session state holding the last fetched quote.
///
/// Overwritten by every successful fetch, read (not cleared) by the
/// favorite command, absent until the user's first fetch. Lost on restart.
#[derive(Default)]
pub struct PendingQuotes {
    inner: DashMap<UserId, Quote>,
}

impl PendingQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest fetched quote for `user_id`, replacing any prior one.
    pub fn set(&self, user_id: UserId, quote: Quote) {
        self.inner.insert(user_id, quote);
    }

    /// Returns the user's pending quote, if any, leaving it in place.
    pub fn get(&self, user_id: UserId) -> Option<Quote> {
        self.inner.get(&user_id).map(|entry| entry.value().clone())
    }
}
