// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `quotly serve` command implementation.
//!
//! Starts the bot with the Telegram channel, the API-Ninjas quote provider,
//! and SQLite storage, then runs the bot loop until ctrl-c triggers a
//! graceful shutdown.

use std::sync::Arc;

use quotly_bot::{BotLoop, CommandDispatcher, RateLimiter};
use quotly_config::model::QuotlyConfig;
use quotly_core::error::QuotlyError;
use quotly_core::{ChannelAdapter, FavoritesStore, QuoteProvider, StorageAdapter};
use quotly_quotes::ApiNinjasProvider;
use quotly_storage::SqliteStorage;
use quotly_telegram::TelegramChannel;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Runs the `quotly serve` command.
pub async fn run_serve(config: QuotlyConfig) -> Result<(), QuotlyError> {
    init_tracing(&config.agent.log_level);

    info!(bot_name = config.agent.name.as_str(), "starting quotly serve");

    // Initialize storage first: nothing else is useful without it.
    let storage = Arc::new(SqliteStorage::new(config.storage.clone()));
    storage.initialize().await?;

    let provider: Arc<dyn QuoteProvider> = Arc::new(ApiNinjasProvider::new(&config.quotes)?);

    let mut channel = TelegramChannel::new(&config.telegram)?;
    channel.connect().await?;
    let channel: Arc<dyn ChannelAdapter> = Arc::new(channel);

    let store: Arc<dyn FavoritesStore> = storage.clone();
    let dispatcher = Arc::new(CommandDispatcher::new(
        provider,
        store,
        RateLimiter::new(&config.rate_limit),
    ));

    let cancel = CancellationToken::new();
    spawn_signal_handler(cancel.clone());

    let bot = BotLoop::new(channel, dispatcher);
    let result = bot.run(cancel).await;

    if let Err(e) = storage.close().await {
        error!(error = %e, "failed to close storage");
    }

    info!("quotly stopped");
    result
}

/// Initializes the tracing subscriber from the configured log level.
///
/// `RUST_LOG` takes precedence over the config value when set.
fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Cancels the token on the first ctrl-c.
fn spawn_signal_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            return;
        }
        info!("ctrl-c received, shutting down");
        cancel.cancel();
    });
}
