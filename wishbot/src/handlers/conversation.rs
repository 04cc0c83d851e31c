//! Conversation handler: `/start`, button presses and free-text names.
//!
//! Runs behind the membership gate, so every user seen here is a confirmed member. The state is
//! derived from the stored record on each event; see [`ConversationState`].

use std::sync::Arc;

use async_trait::async_trait;
use storage::{Language, RecordUpdate, StorageError, UserRecord, UserStore};
use tracing::{error, info, instrument, warn};
use wishbot_core::{Bot, Handler, HandlerResponse, Message, MessageKind, Reply, Result, WishBotError};

use crate::keyboards::{language_keyboard, result_keyboard, CallbackAction};
use crate::link::LinkBuilder;
use crate::state::ConversationState;
use crate::texts;

pub struct ConversationHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn UserStore>,
    links: LinkBuilder,
}

fn storage_error(user_id: i64, e: StorageError) -> WishBotError {
    error!(error = %e, user_id = user_id, "User store failed");
    WishBotError::Storage(e.to_string())
}

impl ConversationHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn UserStore>, links: LinkBuilder) -> Self {
        Self { bot, store, links }
    }

    async fn load(&self, user_id: i64) -> Result<UserRecord> {
        self.store
            .get(user_id)
            .await
            .map_err(|e| storage_error(user_id, e))
    }

    async fn apply(&self, user_id: i64, update: RecordUpdate) -> Result<UserRecord> {
        self.store
            .update(user_id, update)
            .await
            .map_err(|e| storage_error(user_id, e))
    }

    /// Sends `reply` as a new message in the event's chat.
    async fn send(&self, message: &Message, reply: Reply) -> Result<HandlerResponse> {
        self.bot.send_message(&message.chat, &reply).await?;
        Ok(HandlerResponse::Reply(reply.text))
    }

    /// Replaces the message holding the pressed button; falls back to a new message when Telegram
    /// did not include it.
    async fn edit(&self, message: &Message, reply: Reply) -> Result<HandlerResponse> {
        if message.id.is_empty() {
            return self.send(message, reply).await;
        }
        self.bot
            .edit_message(&message.chat, &message.id, &reply)
            .await?;
        Ok(HandlerResponse::Reply(reply.text))
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn on_start(&self, message: &Message) -> Result<HandlerResponse> {
        self.send(
            message,
            Reply::text(texts::CHOOSE_LANGUAGE).with_keyboard(language_keyboard()),
        )
        .await
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id, data = %message.content))]
    async fn on_callback(&self, message: &Message) -> Result<HandlerResponse> {
        let action = match message.content.parse::<CallbackAction>() {
            Ok(action) => action,
            Err(e) => {
                warn!(error = %e, user_id = message.user.id, "Ignoring callback");
                return Ok(HandlerResponse::Ignore);
            }
        };

        match action {
            CallbackAction::VerifyMembership => {
                self.edit(
                    message,
                    Reply::text(texts::JOINED_CHOOSE_LANGUAGE).with_keyboard(language_keyboard()),
                )
                .await
            }
            CallbackAction::ChooseLanguage(language) => {
                self.apply(message.user.id, RecordUpdate::SetLanguage(language))
                    .await?;
                info!(user_id = message.user.id, language = %language, "Language chosen");
                self.edit(message, Reply::text(texts::name_prompt(language)))
                    .await
            }
            CallbackAction::CopyLink => {
                let record = self.load(message.user.id).await?;
                match record.link {
                    Some(link) => {
                        self.send(message, Reply::text(texts::copyable_link(&link)).markdown_v2())
                            .await
                    }
                    None => self.send(message, Reply::text(texts::NAME_FIRST)).await,
                }
            }
        }
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn on_text(&self, message: &Message) -> Result<HandlerResponse> {
        let record = self.load(message.user.id).await?;
        let state = ConversationState::from_record(&record);
        let Some(language) = state.language() else {
            info!(user_id = message.user.id, state = state.label(), "Name sent before language");
            return self
                .send(
                    message,
                    Reply::text(texts::LANGUAGE_FIRST).with_keyboard(language_keyboard()),
                )
                .await;
        };

        let name = message.content.trim();
        if name.is_empty() {
            return self
                .send(message, Reply::text(texts::name_prompt(language)))
                .await;
        }

        self.submit_name(message, language, name).await
    }

    async fn submit_name(
        &self,
        message: &Message,
        language: Language,
        name: &str,
    ) -> Result<HandlerResponse> {
        let link = self.links.build(language, name);
        self.apply(
            message.user.id,
            RecordUpdate::SetWish {
                name: name.to_string(),
                link: link.clone(),
            },
        )
        .await?;
        info!(
            user_id = message.user.id,
            language = %language,
            link = %link,
            "Wish link generated"
        );

        self.send(
            message,
            Reply::text(texts::link_ready(language)).with_keyboard(result_keyboard(&link)),
        )
        .await
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match &message.kind {
            MessageKind::Command(name) if name == "start" => self.on_start(message).await,
            MessageKind::Command(name) => {
                info!(user_id = message.user.id, command = %name, "Ignoring unknown command");
                Ok(HandlerResponse::Ignore)
            }
            MessageKind::Callback { .. } => self.on_callback(message).await,
            MessageKind::Text => self.on_text(message).await,
        }
    }
}
