use std::sync::Arc;

use anyhow::Result;
use clap::ValueEnum;
use handler_chain::HandlerChain;
use teloxide::types::Update;
use tracing::{debug, error, info, instrument};
use wishbot_core::{init_tracing, HandlerResponse, Message, ToCoreMessage};

use crate::components::{
    build_bot_components, build_handler_chain, build_teloxide_bot, create_user_store,
    BotComponents,
};
use crate::config::BotConfig;
use crate::telegram::{run_polling, run_webhook, TelegramUpdateWrapper};

/// How updates reach the bot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TransportMode {
    /// Long polling via getUpdates.
    #[default]
    Polling,
    /// HTTP server receiving POST /webhook.
    Webhook,
}

/// The bot's update entry point: converts updates and runs the handler chain.
pub struct WishBot {
    handler_chain: HandlerChain,
}

impl WishBot {
    pub fn new(components: &BotComponents) -> Self {
        Self {
            handler_chain: build_handler_chain(components),
        }
    }

    /// Handles one Telegram update. Errors are logged, not returned: one failing update must not
    /// stop the transport. Returns the chain's response, or `None` if the update was ignored or failed.
    pub async fn handle_update(&self, update: &Update) -> Option<HandlerResponse> {
        let Some(message) = TelegramUpdateWrapper(update).to_core() else {
            debug!(update_id = ?update.id, "Ignoring update without text or callback data");
            return None;
        };
        self.handle_core_message(&message).await
    }

    /// Drive the handler chain with a core Message.
    pub async fn handle_core_message(&self, message: &Message) -> Option<HandlerResponse> {
        match self.handler_chain.handle(message).await {
            Ok(response) => Some(response),
            Err(e) => {
                error!(
                    error = %e,
                    user_id = message.user.id,
                    kind = message.kind_label(),
                    "Handler chain failed"
                );
                None
            }
        }
    }
}

/// Main entry: validate config, init logging, build components, then serve updates with `mode`.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig, mode: TransportMode) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file()))?;

    info!(
        store_type = %config.store_type(),
        data_file = %config.data_file(),
        channel = %config.wish().channel_id,
        mode = ?mode,
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config)?;
    let store = create_user_store(&config).await?;
    let components = build_bot_components(&config, teloxide_bot.clone(), store)?;
    let app = Arc::new(WishBot::new(&components));

    info!("Bot started successfully");

    match mode {
        TransportMode::Polling => run_polling(teloxide_bot, app).await,
        TransportMode::Webhook => {
            let addr = config.wish().webhook_socket_addr()?;
            let public_url = config
                .wish()
                .webhook_url
                .as_deref()
                .map(reqwest::Url::parse)
                .transpose()?;
            run_webhook(teloxide_bot, app, addr, public_url).await
        }
    }
}
