//! # Birthday-wish bot
//!
//! Gates on channel membership, lets the user pick a language, collects a name and replies with a link to the
//! wish page. Per-user state lives in a `storage::UserStore`; transports are long polling and webhook.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod keyboards;
pub mod link;
pub mod membership;
pub mod runner;
pub mod state;
pub mod telegram;
pub mod texts;

pub use cli::{load_config, Cli, Commands};
pub use components::{
    build_bot_components, build_handler_chain, build_teloxide_bot, create_user_store,
    BotComponents,
};
pub use config::{BotConfig, ChannelId};
pub use handlers::{CallbackAckHandler, ConversationHandler, LoggingHandler, MembershipGateHandler};
pub use link::LinkBuilder;
pub use membership::{Membership, MembershipChecker};
pub use runner::{run_bot, TransportMode, WishBot};
pub use state::ConversationState;
pub use telegram::{webhook_router, TelegramBotAdapter, TelegramMembershipChecker};
