//! Converts teloxide updates into core [`Message`]s. Only text messages and callback queries with
//! data are kept; everything else maps to `None`.

use teloxide::types::{CallbackQuery, Update, UpdateKind};
use wishbot_core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Telegram user to core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl ToCoreUser for TelegramUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram update to core message.
pub struct TelegramUpdateWrapper<'a>(pub &'a Update);

impl ToCoreMessage for TelegramUpdateWrapper<'_> {
    fn to_core(&self) -> Option<Message> {
        match &self.0.kind {
            UpdateKind::Message(msg) => message_to_core(msg),
            UpdateKind::CallbackQuery(query) => callback_to_core(query),
            _ => None,
        }
    }
}

/// `/start@my_bot payload` → `start`. `None` when `text` is not a command.
pub fn parse_command(text: &str) -> Option<String> {
    let head = text.split_whitespace().next()?;
    let name = head.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name);
    if name.is_empty() {
        None
    } else {
        Some(name.to_lowercase())
    }
}

fn chat_to_core(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}

fn message_to_core(msg: &teloxide::types::Message) -> Option<Message> {
    let text = msg.text()?;
    let user = msg.from.as_ref()?;
    let kind = match parse_command(text) {
        Some(name) => MessageKind::Command(name),
        None => MessageKind::Text,
    };
    Some(Message {
        id: msg.id.0.to_string(),
        user: TelegramUserWrapper(user).to_core(),
        chat: chat_to_core(&msg.chat),
        content: text.to_string(),
        kind,
        created_at: msg.date,
    })
}

fn callback_to_core(query: &CallbackQuery) -> Option<Message> {
    let data = query.data.as_deref()?;
    let user = TelegramUserWrapper(&query.from).to_core();
    let (id, chat) = match &query.message {
        Some(origin) => (origin.id().0.to_string(), chat_to_core(origin.chat())),
        None => (String::new(), Chat::private(user.id)),
    };
    Some(Message {
        id,
        user,
        chat,
        content: data.to_string(),
        kind: MessageKind::Callback {
            query_id: query.id.0.clone(),
        },
        created_at: chrono::Utc::now(),
    })
}
