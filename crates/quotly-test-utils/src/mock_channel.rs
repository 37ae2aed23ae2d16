// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock channel adapter for deterministic testing.
//!
//! `MockChannel` implements `ChannelAdapter` with injectable inbound
//! messages and captured outbound messages for assertion in tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use quotly_core::traits::adapter::PluginAdapter;
use quotly_core::traits::channel::ChannelAdapter;
use quotly_core::types::{
    AdapterType, HealthStatus, InboundMessage, MessageId, OutboundMessage, UserId,
};
use quotly_core::QuotlyError;

/// A mock messaging channel for testing.
///
/// Provides two queues:
/// - **inbound**: messages injected via `inject_message()` are returned by `receive()`
/// - **sent**: messages passed to `send()` are captured and retrievable via `sent_messages()`
pub struct MockChannel {
    inbound: Arc<Mutex<VecDeque<InboundMessage>>>,
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
    notify: Arc<Notify>,
    next_id: AtomicU64,
}

impl MockChannel {
    /// Create a new mock channel with empty queues.
    pub fn new() -> Self {
        Self {
            inbound: Arc::new(Mutex::new(VecDeque::new())),
            sent: Arc::new(Mutex::new(Vec::new())),
            notify: Arc::new(Notify::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Inject an inbound message into the receive queue.
    pub async fn inject_message(&self, msg: InboundMessage) {
        self.inbound.lock().await.push_back(msg);
        self.notify.notify_one();
    }

    /// Convenience: inject a text message from `user_id`, using the user id
    /// as the chat id the way a private Telegram chat does.
    pub async fn inject_text(&self, user_id: i64, text: &str) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.inject_message(InboundMessage {
            id: id.to_string(),
            channel: "mock".to_string(),
            user_id: UserId(user_id),
            chat_id: user_id.to_string(),
            text: text.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
        .await;
    }

    /// Get all messages that were sent through `send()`.
    pub async fn sent_messages(&self) -> Vec<OutboundMessage> {
        self.sent.lock().await.clone()
    }

    /// Get the count of sent messages.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    /// Clear all sent messages.
    pub async fn clear_sent(&self) {
        self.sent.lock().await.clear();
    }
}

impl Default for MockChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockChannel {
    fn name(&self) -> &str {
        "mock-channel"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Channel
    }

    async fn health_check(&self) -> Result<HealthStatus, QuotlyError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), QuotlyError> {
        Ok(())
    }
}

#[async_trait]
impl ChannelAdapter for MockChannel {
    async fn connect(&mut self) -> Result<(), QuotlyError> {
        Ok(())
    }

    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, QuotlyError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.sent.lock().await.push(msg);
        Ok(MessageId(format!("mock-msg-{id}")))
    }

    async fn receive(&self) -> Result<InboundMessage, QuotlyError> {
        loop {
            {
                let mut queue = self.inbound.lock().await;
                if let Some(msg) = queue.pop_front() {
                    return Ok(msg);
                }
            }
            // Wait for notification that a new message was injected.
            self.notify.notified().await;
        }
    }
}
