//! Answers every callback query before anything else runs, so the client stops its progress
//! indicator even when the gate then rejects the user.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{instrument, warn};
use wishbot_core::{Bot, Handler, Message, Result};

pub struct CallbackAckHandler {
    bot: Arc<dyn Bot>,
}

impl CallbackAckHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for CallbackAckHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        if let Some(query_id) = message.callback_query_id() {
            // The answer only clears the spinner; a failure must not block the conversation.
            if let Err(e) = self.bot.answer_callback(query_id).await {
                warn!(error = %e, user_id = message.user.id, "Failed to answer callback query");
            }
        }
        Ok(true)
    }
}
