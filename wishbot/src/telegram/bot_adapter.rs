//! Wraps teloxide::Bot and implements [`wishbot_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{
        CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode,
    },
};
use wishbot_core::{
    parse_message_id, Bot as CoreBot, ButtonAction, Chat, InlineKeyboard, Reply, Result,
    TextFormat, WishBotError,
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn bot_error(e: impl std::fmt::Display) -> WishBotError {
    WishBotError::Bot(e.to_string())
}

/// Core keyboard to Telegram markup. Fails on a URL button whose target does not parse.
pub(crate) fn to_markup(keyboard: &InlineKeyboard) -> Result<InlineKeyboardMarkup> {
    let rows = keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| match &button.action {
                    ButtonAction::Callback(data) => {
                        Ok(InlineKeyboardButton::callback(button.label.clone(), data.clone()))
                    }
                    ButtonAction::Url(url) => {
                        let url = reqwest::Url::parse(url).map_err(|e| {
                            WishBotError::Bot(format!("Invalid button URL {}: {}", url, e))
                        })?;
                        Ok(InlineKeyboardButton::url(button.label.clone(), url))
                    }
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(InlineKeyboardMarkup::new(rows))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        if let Some(keyboard) = &reply.keyboard {
            request = request.reply_markup(to_markup(keyboard)?);
        }
        if reply.format == TextFormat::MarkdownV2 {
            request = request.parse_mode(ParseMode::MarkdownV2);
        }
        request.await.map_err(bot_error)?;
        Ok(())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, reply: &Reply) -> Result<()> {
        let id = parse_message_id(message_id)?;
        let mut request =
            self.bot
                .edit_message_text(ChatId(chat.id), MessageId(id), reply.text.clone());
        if let Some(keyboard) = &reply.keyboard {
            request = request.reply_markup(to_markup(keyboard)?);
        }
        if reply.format == TextFormat::MarkdownV2 {
            request = request.parse_mode(ParseMode::MarkdownV2);
        }
        request.await.map_err(bot_error)?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(query_id.to_string()))
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishbot_core::InlineButton;

    #[test]
    fn test_to_markup_keeps_layout() {
        let keyboard = InlineKeyboard::default()
            .row(vec![InlineButton::url("Join", "https://t.me/nextgentech_bd")])
            .row(vec![
                InlineButton::callback("A", "bn"),
                InlineButton::callback("B", "en"),
            ]);

        let markup = to_markup(&keyboard).unwrap();

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 1);
        assert_eq!(markup.inline_keyboard[1].len(), 2);
        assert_eq!(markup.inline_keyboard[1][0].text, "A");
    }

    #[test]
    fn test_to_markup_rejects_bad_url() {
        let keyboard = InlineKeyboard::default().row(vec![InlineButton::url("Bad", "not a url")]);
        assert!(matches!(to_markup(&keyboard), Err(WishBotError::Bot(_))));
    }
}
