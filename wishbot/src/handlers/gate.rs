//! Membership gate: re-checks channel membership on every event and stops the chain with a join
//! prompt for users who are not members. A failed check is treated like "not a member".

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};
use wishbot_core::{Bot, Handler, Message, Reply, Result};

use crate::keyboards::join_keyboard;
use crate::membership::{Membership, MembershipChecker};
use crate::texts::{JOIN_PROMPT, NOT_JOINED};

pub struct MembershipGateHandler {
    bot: Arc<dyn Bot>,
    checker: Arc<dyn MembershipChecker>,
    channel_link: String,
}

impl MembershipGateHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        checker: Arc<dyn MembershipChecker>,
        channel_link: impl Into<String>,
    ) -> Self {
        Self {
            bot,
            checker,
            channel_link: channel_link.into(),
        }
    }

    /// Callbacks edit the message holding the pressed button; commands and text get a new message.
    async fn send_join_prompt(&self, message: &Message) -> Result<()> {
        let keyboard = join_keyboard(&self.channel_link);
        if message.is_callback() {
            let reply = Reply::text(NOT_JOINED).with_keyboard(keyboard);
            if message.id.is_empty() {
                self.bot.send_message(&message.chat, &reply).await
            } else {
                self.bot.edit_message(&message.chat, &message.id, &reply).await
            }
        } else {
            let reply = Reply::text(JOIN_PROMPT).with_keyboard(keyboard);
            self.bot.send_message(&message.chat, &reply).await
        }
    }
}

#[async_trait]
impl Handler for MembershipGateHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let membership = self.checker.check(message.user.id).await;
        match &membership {
            Membership::Member => return Ok(true),
            Membership::NotMember => {
                info!(user_id = message.user.id, "User is not a channel member");
            }
            Membership::CheckFailed(reason) => {
                warn!(
                    user_id = message.user.id,
                    reason = %reason,
                    "Membership check failed, treating as not a member"
                );
            }
        }
        self.send_join_prompt(message).await?;
        Ok(false)
    }
}
