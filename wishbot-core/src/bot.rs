//! Bot abstraction for the outgoing side of a conversation.
//!
//! [`Bot`] is transport-agnostic; `wishbot::telegram::TelegramBotAdapter` implements it via teloxide and
//! tests substitute a recording mock.

use crate::error::{Result, WishBotError};
use crate::types::{Chat, Reply};
use async_trait::async_trait;

/// Sends, edits and acknowledges. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `reply` as a new message to the given chat.
    async fn send_message(&self, chat: &Chat, reply: &Reply) -> Result<()>;
    /// Replaces text and keyboard of an already-sent message. `message_id` is transport-specific (Telegram: numeric string).
    async fn edit_message(&self, chat: &Chat, message_id: &str, reply: &Reply) -> Result<()>;
    /// Acknowledges a button press so the client stops showing progress.
    async fn answer_callback(&self, query_id: &str) -> Result<()>;
}

/// Parses a message id string into an i32. Used by edit_message.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| WishBotError::Bot(format!("Invalid message_id for edit: {}", s)))
}
