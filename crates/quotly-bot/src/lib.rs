// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bot loop and command dispatch for Quotly.
//!
//! The [`BotLoop`] is the central coordinator that:
//! - Receives messages from a channel adapter
//! - Spawns one handler task per inbound message, so multiple users'
//!   commands are in flight concurrently
//! - Sends each reply back through the channel
//! - Periodically sweeps expired rate-limit state
//! - Handles graceful shutdown via a cancellation token

pub mod command;
pub mod dispatcher;
pub mod pending;
pub mod ratelimit;

use std::sync::Arc;
use std::time::Duration;

use quotly_core::{ChannelAdapter, InboundMessage, OutboundMessage, QuotlyError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

pub use command::Command;
pub use dispatcher::CommandDispatcher;
pub use pending::PendingQuotes;
pub use ratelimit::RateLimiter;

/// How often fully-expired rate-limit windows are swept.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// The main bot loop pumping messages between the channel and dispatcher.
pub struct BotLoop {
    channel: Arc<dyn ChannelAdapter>,
    dispatcher: Arc<CommandDispatcher>,
}

impl BotLoop {
    pub fn new(channel: Arc<dyn ChannelAdapter>, dispatcher: Arc<CommandDispatcher>) -> Self {
        Self {
            channel,
            dispatcher,
        }
    }

    /// Runs the bot loop until the cancellation token is triggered.
    ///
    /// Each inbound message is handled in its own task; no failure handling
    /// one user's command can affect another's or stop the loop.
    pub async fn run(&self, cancel: CancellationToken) -> Result<(), QuotlyError> {
        info!("bot loop running");

        let mut sweep_tick = tokio::time::interval(SWEEP_INTERVAL);

        loop {
            tokio::select! {
                msg = self.channel.receive() => {
                    match msg {
                        Ok(inbound) => self.spawn_handler(inbound),
                        Err(e) => {
                            error!(error = %e, "channel receive error");
                            if e.to_string().contains("closed") {
                                break;
                            }
                        }
                    }
                }
                _ = sweep_tick.tick() => {
                    self.dispatcher.sweep_rate_windows();
                }
                _ = cancel.cancelled() => {
                    info!("shutdown signal received, stopping bot loop");
                    break;
                }
            }
        }

        info!("bot loop stopped");
        Ok(())
    }

    fn spawn_handler(&self, inbound: InboundMessage) {
        debug!(user_id = %inbound.user_id, "handling inbound message");
        let dispatcher = self.dispatcher.clone();
        let channel = self.channel.clone();
        tokio::spawn(async move {
            let reply = dispatcher.handle(inbound.user_id, &inbound.text).await;
            let out = OutboundMessage {
                chat_id: inbound.chat_id,
                text: reply,
            };
            if let Err(e) = channel.send(out).await {
                error!(user_id = %inbound.user_id, error = %e, "failed to send reply");
            }
        });
    }
}
