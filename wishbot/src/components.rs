//! Component factory: builds the teloxide bot, user store and BotComponents from config, and assembles the handler chain.

use std::sync::Arc;

use anyhow::Result;
use handler_chain::HandlerChain;
use storage::{InMemoryStore, JsonFileStore, UserStore};
use tracing::{error, info, instrument};
use wishbot_core::Bot;

use crate::config::BotConfig;
use crate::handlers::{
    CallbackAckHandler, ConversationHandler, LoggingHandler, MembershipGateHandler,
};
use crate::link::LinkBuilder;
use crate::membership::MembershipChecker;
use crate::telegram::{TelegramBotAdapter, TelegramMembershipChecker};

/// Dependencies of the handler chain. Tests build this directly with mocks.
#[derive(Clone)]
pub struct BotComponents {
    pub bot: Arc<dyn Bot>,
    pub membership: Arc<dyn MembershipChecker>,
    pub store: Arc<dyn UserStore>,
    pub links: LinkBuilder,
    pub channel_link: String,
}

/// teloxide Bot with the configured token and optional custom API URL.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url) => {
            info!(api_url = %url, "Using custom Telegram API URL");
            Ok(bot.set_api_url(reqwest::Url::parse(url)?))
        }
        None => Ok(bot),
    }
}

/// Creates the user store selected by STORE_TYPE.
#[instrument(skip(config))]
pub async fn create_user_store(config: &BotConfig) -> Result<Arc<dyn UserStore>> {
    match config.store_type() {
        "memory" => {
            info!("Using in-memory user store");
            Ok(Arc::new(InMemoryStore::new()))
        }
        _ => {
            info!(path = %config.data_file(), "Using JSON file user store");
            let store = JsonFileStore::open(config.data_file()).await.map_err(|e| {
                error!(error = %e, path = %config.data_file(), "Failed to open user data file");
                anyhow::anyhow!("Failed to open user data file {}: {}", config.data_file(), e)
            })?;
            Ok(Arc::new(store))
        }
    }
}

/// Builds BotComponents backed by Telegram for the given store.
pub fn build_bot_components(
    config: &BotConfig,
    teloxide_bot: teloxide::Bot,
    store: Arc<dyn UserStore>,
) -> Result<BotComponents> {
    let channel = config.wish().channel()?;
    let membership = Arc::new(TelegramMembershipChecker::new(teloxide_bot.clone(), channel));
    Ok(BotComponents {
        bot: Arc::new(TelegramBotAdapter::new(teloxide_bot)),
        membership,
        store,
        links: LinkBuilder::new(&config.wish().en_site, &config.wish().bn_site),
        channel_link: config.wish().channel_link.clone(),
    })
}

/// Logging → callback acknowledgement → membership gate → conversation.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CallbackAckHandler::new(components.bot.clone())))
        .add_handler(Arc::new(MembershipGateHandler::new(
            components.bot.clone(),
            components.membership.clone(),
            components.channel_link.clone(),
        )))
        .add_handler(Arc::new(ConversationHandler::new(
            components.bot.clone(),
            components.store.clone(),
            components.links.clone(),
        )))
}
