//! Membership checker backed by the Bot API `getChatMember` call.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatMemberStatus, Recipient},
};
use tracing::debug;

use crate::config::ChannelId;
use crate::membership::{Membership, MembershipChecker};

pub struct TelegramMembershipChecker {
    bot: teloxide::Bot,
    channel: ChannelId,
}

impl TelegramMembershipChecker {
    pub fn new(bot: teloxide::Bot, channel: ChannelId) -> Self {
        Self { bot, channel }
    }

    fn recipient(&self) -> Recipient {
        match &self.channel {
            ChannelId::Username(name) => Recipient::ChannelUsername(name.clone()),
            ChannelId::Id(id) => Recipient::Id(ChatId(*id)),
        }
    }
}

#[async_trait]
impl MembershipChecker for TelegramMembershipChecker {
    async fn check(&self, user_id: i64) -> Membership {
        let result = self
            .bot
            .get_chat_member(self.recipient(), UserId(user_id as u64))
            .await;
        match result {
            Ok(member) => {
                let status = member.status();
                debug!(user_id = user_id, status = ?status, "Chat member status");
                match status {
                    ChatMemberStatus::Owner
                    | ChatMemberStatus::Administrator
                    | ChatMemberStatus::Member => Membership::Member,
                    _ => Membership::NotMember,
                }
            }
            Err(e) => Membership::CheckFailed(e.to_string()),
        }
    }
}
