// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram channel adapter for the Quotly bot.
//!
//! Implements [`ChannelAdapter`] for the Telegram Bot API via teloxide,
//! providing long polling for inbound commands and plain-text reply
//! delivery.

pub mod handler;

use async_trait::async_trait;
use quotly_config::model::TelegramConfig;
use quotly_core::error::QuotlyError;
use quotly_core::traits::{ChannelAdapter, PluginAdapter};
use quotly_core::types::{
    AdapterType, HealthStatus, InboundMessage, MessageId, OutboundMessage,
};
use teloxide::prelude::*;
use teloxide::types::{ChatId, Recipient};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Telegram channel adapter implementing [`ChannelAdapter`].
///
/// Connects to Telegram via long polling and forwards text messages into
/// an inbound queue consumed by the bot loop.
pub struct TelegramChannel {
    bot: Bot,
    inbound_rx: tokio::sync::Mutex<mpsc::Receiver<InboundMessage>>,
    inbound_tx: mpsc::Sender<InboundMessage>,
    polling_handle: Option<tokio::task::JoinHandle<()>>,
}

impl TelegramChannel {
    /// Creates a new Telegram channel adapter.
    ///
    /// Requires `config.bot_token` to be set.
    pub fn new(config: &TelegramConfig) -> Result<Self, QuotlyError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            QuotlyError::Config("telegram.bot_token is required for the Telegram channel".into())
        })?;

        if token.is_empty() {
            return Err(QuotlyError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        let bot = Bot::new(token);
        let (inbound_tx, inbound_rx) = mpsc::channel(100);

        Ok(Self {
            bot,
            inbound_rx: tokio::sync::Mutex::new(inbound_rx),
            inbound_tx,
            polling_handle: None,
        })
    }

    /// Returns a reference to the underlying teloxide Bot.
    pub fn bot(&self) -> &Bot {
        &self.bot
    }
}

#[async_trait]
impl PluginAdapter for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Channel
    }

    async fn health_check(&self) -> Result<HealthStatus, QuotlyError> {
        // Check if the bot token is valid by calling getMe.
        match self.bot.get_me().await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "Telegram bot unreachable: {e}"
            ))),
        }
    }

    async fn shutdown(&self) -> Result<(), QuotlyError> {
        debug!("Telegram channel shutting down");
        // The polling handle is dropped with the channel, aborting the task.
        // For graceful shutdown, the bot loop stops calling receive() first.
        Ok(())
    }
}

#[async_trait]
impl ChannelAdapter for TelegramChannel {
    async fn connect(&mut self) -> Result<(), QuotlyError> {
        if self.polling_handle.is_some() {
            return Ok(()); // Already connected
        }

        let bot = self.bot.clone();
        let tx = self.inbound_tx.clone();

        info!("starting Telegram long polling");

        let handle = tokio::spawn(async move {
            let handler = Update::filter_message().endpoint(move |msg: Message| {
                let tx = tx.clone();
                async move {
                    match handler::to_inbound_message(&msg) {
                        Some(inbound) => {
                            if tx.send(inbound).await.is_err() {
                                warn!("inbound queue closed, dropping message");
                            }
                        }
                        None => {
                            debug!(msg_id = msg.id.0, "ignoring non-text message");
                        }
                    }
                    respond(())
                }
            });

            Dispatcher::builder(bot, handler)
                .default_handler(|_| async {}) // Silently ignore non-message updates
                .build()
                .dispatch()
                .await;
        });

        self.polling_handle = Some(handle);
        Ok(())
    }

    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, QuotlyError> {
        let chat_id = msg
            .chat_id
            .parse::<i64>()
            .map(ChatId)
            .map_err(|e| QuotlyError::Channel {
                message: format!("invalid chat_id `{}`: {e}", msg.chat_id),
                source: None,
            })?;

        let sent = self
            .bot
            .send_message(Recipient::Id(chat_id), &msg.text)
            .await
            .map_err(|e| QuotlyError::Channel {
                message: format!("failed to send message: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(MessageId(sent.id.0.to_string()))
    }

    async fn receive(&self) -> Result<InboundMessage, QuotlyError> {
        let mut rx = self.inbound_rx.lock().await;
        rx.recv().await.ok_or_else(|| QuotlyError::Channel {
            message: "Telegram inbound channel closed".into(),
            source: None,
        })
    }
}
