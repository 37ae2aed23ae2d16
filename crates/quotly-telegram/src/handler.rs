// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content extraction from Telegram updates.
//!
//! Converts an incoming Telegram message into the channel-agnostic
//! [`InboundMessage`] the bot loop consumes. Only text messages with a
//! sender are forwarded; everything else is ignored.

use quotly_core::types::{InboundMessage, UserId};
use teloxide::prelude::*;

/// Converts a Telegram message into an [`InboundMessage`].
///
/// Returns `None` for non-text messages and messages without a sender
/// (e.g. channel posts).
pub fn to_inbound_message(msg: &Message) -> Option<InboundMessage> {
    let text = msg.text()?;
    let from = msg.from.as_ref()?;

    Some(InboundMessage {
        id: msg.id.0.to_string(),
        channel: "telegram".to_string(),
        user_id: UserId(from.id.0 as i64),
        chat_id: msg.chat.id.0.to_string(),
        text: text.to_string(),
        timestamp: msg.date.to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a mock private chat message from JSON, matching the Telegram
    /// Bot API structure.
    fn make_private_message(user_id: u64, text: &str) -> Message {
        let json = serde_json::json!({
            "message_id": 42,
            "date": 1700000000i64,
            "chat": {
                "id": user_id as i64,
                "type": "private",
                "first_name": "Test",
            },
            "from": {
                "id": user_id,
                "is_bot": false,
                "first_name": "Test",
            },
            "text": text,
        });

        serde_json::from_value(json).expect("failed to deserialize mock message")
    }

    /// Build a mock message without a sender.
    fn make_no_sender_message(text: &str) -> Message {
        let json = serde_json::json!({
            "message_id": 1,
            "date": 1700000000i64,
            "chat": {
                "id": 12345i64,
                "type": "private",
                "first_name": "Test",
            },
            "text": text,
        });

        serde_json::from_value(json).expect("failed to deserialize mock message")
    }

    /// Build a mock group chat message.
    fn make_group_message(user_id: u64, text: &str) -> Message {
        let json = serde_json::json!({
            "message_id": 2,
            "date": 1700000000i64,
            "chat": {
                "id": -100123i64,
                "type": "supergroup",
                "title": "Test Group",
            },
            "from": {
                "id": user_id,
                "is_bot": false,
                "first_name": "Test",
            },
            "text": text,
        });

        serde_json::from_value(json).expect("failed to deserialize mock group message")
    }

    #[test]
    fn maps_text_message_fields() {
        let msg = make_private_message(12345, "/quote courage");
        let inbound = to_inbound_message(&msg).expect("text message should map");

        assert_eq!(inbound.id, "42");
        assert_eq!(inbound.channel, "telegram");
        assert_eq!(inbound.user_id, UserId(12345));
        assert_eq!(inbound.chat_id, "12345");
        assert_eq!(inbound.text, "/quote courage");
    }

    #[test]
    fn skips_message_without_sender() {
        let msg = make_no_sender_message("/quote");
        assert!(to_inbound_message(&msg).is_none());
    }

    #[test]
    fn group_message_uses_group_chat_id_for_replies() {
        let msg = make_group_message(12345, "/favorites");
        let inbound = to_inbound_message(&msg).expect("group text should map");
        assert_eq!(inbound.user_id, UserId(12345));
        assert_eq!(inbound.chat_id, "-100123");
    }
}
