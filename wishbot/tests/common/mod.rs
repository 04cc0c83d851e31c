//! Shared test doubles: a recording [`Bot`], a settable membership checker and event constructors.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use storage::{InMemoryStore, RecordUpdate, StorageError, UserRecord, UserStore};
use wishbot::{BotComponents, LinkBuilder, Membership, MembershipChecker, WishBot};
use wishbot_core::{Bot, Chat, Message, MessageKind, Reply, Result, User, WishBotError};

pub const CHANNEL_LINK: &str = "https://t.me/nextgentech_bd";
pub const USER_ID: i64 = 42;

/// One outgoing call seen by [`MockBot`].
#[derive(Debug, Clone, PartialEq)]
pub enum BotCall {
    Sent { chat_id: i64, reply: Reply },
    Edited { chat_id: i64, message_id: String, reply: Reply },
    Answered { query_id: String },
}

impl BotCall {
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            BotCall::Sent { reply, .. } | BotCall::Edited { reply, .. } => Some(reply),
            BotCall::Answered { .. } => None,
        }
    }
}

/// Records every call; `answer_callback` can be made to fail.
#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<BotCall>>,
    fail_answers: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_answers() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_answers: true,
        })
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than callback answers.
    pub fn replies(&self) -> Vec<BotCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.reply().is_some())
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Polls until at least one reply is recorded or two seconds pass.
    pub async fn wait_for_reply(&self) -> Option<BotCall> {
        for _ in 0..200 {
            if let Some(call) = self.replies().into_iter().next() {
                return Some(call);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        None
    }

    fn record(&self, call: BotCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        self.record(BotCall::Sent {
            chat_id: chat.id,
            reply: reply.clone(),
        });
        Ok(())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, reply: &Reply) -> Result<()> {
        self.record(BotCall::Edited {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            reply: reply.clone(),
        });
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> Result<()> {
        self.record(BotCall::Answered {
            query_id: query_id.to_string(),
        });
        if self.fail_answers {
            return Err(WishBotError::Bot("query is too old".to_string()));
        }
        Ok(())
    }
}

/// Membership checker returning whatever the test last set.
pub struct FixedMembership {
    current: Mutex<Membership>,
}

impl FixedMembership {
    pub fn new(membership: Membership) -> Arc<Self> {
        Arc::new(Self {
            current: Mutex::new(membership),
        })
    }

    pub fn set(&self, membership: Membership) {
        *self.current.lock().unwrap() = membership;
    }
}

#[async_trait]
impl MembershipChecker for FixedMembership {
    async fn check(&self, _user_id: i64) -> Membership {
        self.current.lock().unwrap().clone()
    }
}

/// Store whose every call fails with an IO error.
pub struct FailingStore;

fn disk_error() -> StorageError {
    StorageError::Io(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "user_data.json: permission denied",
    ))
}

#[async_trait]
impl UserStore for FailingStore {
    async fn get(&self, _user_id: i64) -> std::result::Result<UserRecord, StorageError> {
        Err(disk_error())
    }

    async fn save(&self, _user_id: i64, _record: &UserRecord) -> std::result::Result<(), StorageError> {
        Err(disk_error())
    }

    async fn update(
        &self,
        _user_id: i64,
        _update: RecordUpdate,
    ) -> std::result::Result<UserRecord, StorageError> {
        Err(disk_error())
    }
}

/// A WishBot wired to mocks plus handles on each of them.
pub struct Harness {
    pub app: WishBot,
    pub bot: Arc<MockBot>,
    pub membership: Arc<FixedMembership>,
    pub store: Arc<dyn UserStore>,
}

impl Harness {
    pub fn new(membership: Membership) -> Self {
        Self::with_bot(MockBot::new(), membership)
    }

    pub fn with_bot(bot: Arc<MockBot>, membership: Membership) -> Self {
        Self::build(bot, membership, Arc::new(InMemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn UserStore>, membership: Membership) -> Self {
        Self::build(MockBot::new(), membership, store)
    }

    fn build(bot: Arc<MockBot>, membership: Membership, store: Arc<dyn UserStore>) -> Self {
        let membership = FixedMembership::new(membership);
        let components = components(bot.clone(), membership.clone(), store.clone());
        Self {
            app: WishBot::new(&components),
            bot,
            membership,
            store,
        }
    }

    pub async fn send(&self, message: Message) -> Option<wishbot_core::HandlerResponse> {
        self.app.handle_core_message(&message).await
    }
}

pub fn components(
    bot: Arc<MockBot>,
    membership: Arc<FixedMembership>,
    store: Arc<dyn UserStore>,
) -> BotComponents {
    BotComponents {
        bot,
        membership,
        store,
        links: LinkBuilder::default(),
        channel_link: CHANNEL_LINK.to_string(),
    }
}

fn user(id: i64) -> User {
    User {
        id,
        username: Some("rahim".to_string()),
        first_name: Some("Rahim".to_string()),
        last_name: None,
    }
}

fn event(id: &str, content: &str, kind: MessageKind) -> Message {
    Message {
        id: id.to_string(),
        user: user(USER_ID),
        chat: Chat::private(USER_ID),
        content: content.to_string(),
        kind,
        created_at: Utc::now(),
    }
}

pub fn command(name: &str) -> Message {
    event("10", &format!("/{}", name), MessageKind::Command(name.to_string()))
}

pub fn text(content: &str) -> Message {
    event("11", content, MessageKind::Text)
}

/// Button press on message `77`.
pub fn callback(data: &str) -> Message {
    event(
        "77",
        data,
        MessageKind::Callback {
            query_id: "q-1".to_string(),
        },
    )
}

/// Button press whose message Telegram no longer exposes.
pub fn detached_callback(data: &str) -> Message {
    event(
        "",
        data,
        MessageKind::Callback {
            query_id: "q-2".to_string(),
        },
    )
}
