//! Inbound message model: one event per Telegram update the bot cares about.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// What kind of event the message carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// A `/command`; holds the command name without slash or `@bot` suffix, lowercased.
    Command(String),
    /// Free text.
    Text,
    /// An inline button press. `content` holds the callback data.
    Callback { query_id: String },
}

/// A single inbound event with user, chat and content.
///
/// For callbacks, `id` is the id of the message the button is attached to (empty when Telegram
/// no longer exposes it) and `chat` is that message's chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Query id for button presses.
    pub fn callback_query_id(&self) -> Option<&str> {
        match &self.kind {
            MessageKind::Callback { query_id } => Some(query_id.as_str()),
            _ => None,
        }
    }

    pub fn is_callback(&self) -> bool {
        matches!(self.kind, MessageKind::Callback { .. })
    }

    /// Short label for logs.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            MessageKind::Command(_) => "command",
            MessageKind::Text => "text",
            MessageKind::Callback { .. } => "callback",
        }
    }
}
