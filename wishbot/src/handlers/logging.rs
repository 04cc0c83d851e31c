//! Logs each event in before() and the final response in after(); always continues.

use async_trait::async_trait;
use tracing::{debug, info, instrument};
use wishbot_core::{Handler, HandlerResponse, Message, Result};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            kind = message.kind_label(),
            content = %message.content,
            "Received event"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let reply_len = match response {
            HandlerResponse::Reply(text) => Some(text.chars().count()),
            _ => None,
        };
        debug!(
            user_id = message.user.id,
            message_id = %message.id,
            response = ?response,
            reply_len = ?reply_len,
            "Processed event"
        );
        Ok(())
    }
}
