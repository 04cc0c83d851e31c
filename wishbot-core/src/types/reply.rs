//! Outgoing message body: text, optional inline keyboard, text format.

use serde::{Deserialize, Serialize};

use super::keyboard::InlineKeyboard;

/// How the client should render `Reply::text`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextFormat {
    #[default]
    Plain,
    /// Telegram MarkdownV2; the caller is responsible for escaping.
    MarkdownV2,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<InlineKeyboard>,
    pub format: TextFormat,
}

impl Reply {
    /// Plain text, no keyboard.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            format: TextFormat::Plain,
        }
    }

    pub fn with_keyboard(mut self, keyboard: InlineKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn markdown_v2(mut self) -> Self {
        self.format = TextFormat::MarkdownV2;
        self
    }
}
