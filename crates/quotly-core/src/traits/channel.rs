// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel adapter trait for messaging platform integrations.

use async_trait::async_trait;

use crate::error::QuotlyError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{InboundMessage, MessageId, OutboundMessage};

/// Adapter for bidirectional messaging channel integrations.
///
/// Channel adapters connect Quotly to an external messaging platform,
/// handling message ingestion and reply delivery.
#[async_trait]
pub trait ChannelAdapter: PluginAdapter {
    /// Establishes a connection to the messaging platform.
    async fn connect(&mut self) -> Result<(), QuotlyError>;

    /// Sends a plain-text reply through the channel.
    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, QuotlyError>;

    /// Receives the next inbound message from the channel.
    async fn receive(&self) -> Result<InboundMessage, QuotlyError>;
}
