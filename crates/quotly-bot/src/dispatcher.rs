// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command dispatch: one inbound command in, exactly one reply string out.
//!
//! All collaborators are injected; the dispatcher holds no ambient global
//! state. Storage and provider failures terminate in a reply to the
//! originating user and never propagate out of `handle`.

use std::sync::Arc;

use quotly_core::{FavoritesStore, Quote, QuoteProvider, UserId};
use tracing::{error, info, warn};

use crate::command::Command;
use crate::pending::PendingQuotes;
use crate::ratelimit::RateLimiter;

const START_TEXT: &str = "Hi! I'm a bot that can give you quotes. \
    Send /quote to get a quote. Add a category to get a quote from a \
    specific category. For example, /quote happiness";

const HELP_TEXT: &str = "\
/start - Start the bot
/help - Show this help message
/quote - Get a random quote
/quote <category> - Get a quote from a specific category
/favorite - Save the last quote to favorites
/favorites - Get a list of your favorite quotes
/remove_favorite <quote> - Remove a favorite by its exact text";

const RATE_LIMITED: &str = "You're requesting quotes too quickly. Try again in a minute.";
const FETCH_FAILED: &str = "Sorry, I couldn't fetch a quote right now. Try again later.";
const NO_PENDING: &str = "No quote to save. Get a quote first!";
const SAVED: &str = "Quote saved to favorites!";
const DUPLICATE: &str = "Quote already in favorites!";
const NO_FAVORITES: &str = "You haven't saved any favorites yet!";
const REMOVED: &str = "Removed from favorites.";
const NOT_FOUND: &str = "That quote isn't in your favorites.";
const MISSING_ARGUMENT: &str = "Please provide the quote text to remove.";
const STORAGE_FAILED: &str = "Sorry, something went wrong on my side. Try again later.";

/// Orchestrates one command against the rate limiter, quote provider,
/// favorites store, and per-user pending state.
pub struct CommandDispatcher {
    provider: Arc<dyn QuoteProvider>,
    store: Arc<dyn FavoritesStore>,
    limiter: RateLimiter,
    pending: PendingQuotes,
}

impl CommandDispatcher {
    pub fn new(
        provider: Arc<dyn QuoteProvider>,
        store: Arc<dyn FavoritesStore>,
        limiter: RateLimiter,
    ) -> Self {
        Self {
            provider,
            store,
            limiter,
            pending: PendingQuotes::new(),
        }
    }

    /// Handles one inbound message text for `user_id` and returns the reply.
    pub async fn handle(&self, user_id: UserId, text: &str) -> String {
        match Command::parse(text) {
            Command::Start => START_TEXT.to_string(),
            Command::Help | Command::Unknown => HELP_TEXT.to_string(),
            Command::Quote { category } => self.handle_quote(user_id, category.as_deref()).await,
            Command::Favorite => self.handle_favorite(user_id).await,
            Command::Favorites => self.handle_favorites(user_id).await,
            Command::RemoveFavorite { text } => {
                self.handle_remove_favorite(user_id, text.as_deref()).await
            }
        }
    }

    /// Drops rate-limit state for users whose window has fully expired.
    pub fn sweep_rate_windows(&self) {
        self.limiter.sweep();
    }

    async fn handle_quote(&self, user_id: UserId, category: Option<&str>) -> String {
        if !self.limiter.admit(user_id) {
            info!(%user_id, "quote fetch rejected by rate limit");
            return RATE_LIMITED.to_string();
        }

        match self.provider.fetch_quote(category).await {
            Ok(quote) => {
                let reply = format!("{}\n- {}", quote.text, quote.author);
                self.pending.set(user_id, quote);
                reply
            }
            Err(e) => {
                // The pending quote stays whatever it was before this call.
                warn!(%user_id, error = %e, "quote fetch failed");
                FETCH_FAILED.to_string()
            }
        }
    }

    async fn handle_favorite(&self, user_id: UserId) -> String {
        let Some(quote) = self.pending.get(user_id) else {
            return NO_PENDING.to_string();
        };

        match self.store.add_favorite(user_id, &quote).await {
            Ok(true) => SAVED.to_string(),
            Ok(false) => DUPLICATE.to_string(),
            Err(e) => {
                error!(%user_id, error = %e, "failed to save favorite");
                STORAGE_FAILED.to_string()
            }
        }
    }

    async fn handle_favorites(&self, user_id: UserId) -> String {
        match self.store.list_favorites(user_id).await {
            Ok(favorites) if favorites.is_empty() => NO_FAVORITES.to_string(),
            Ok(favorites) => format_favorites(&favorites),
            Err(e) => {
                error!(%user_id, error = %e, "failed to list favorites");
                STORAGE_FAILED.to_string()
            }
        }
    }

    async fn handle_remove_favorite(&self, user_id: UserId, text: Option<&str>) -> String {
        let Some(text) = text else {
            return MISSING_ARGUMENT.to_string();
        };

        match self.store.remove_favorite(user_id, text).await {
            Ok(true) => REMOVED.to_string(),
            Ok(false) => NOT_FOUND.to_string(),
            Err(e) => {
                error!(%user_id, error = %e, "failed to remove favorite");
                STORAGE_FAILED.to_string()
            }
        }
    }
}

fn format_favorites(favorites: &[Quote]) -> String {
    let mut reply = String::from("Your favorite quotes:\n\n");
    for quote in favorites {
        reply.push_str(&format!(
            "📝 {}\n- {} ({})\n\n",
            quote.text, quote.author, quote.category
        ));
    }
    reply
}
