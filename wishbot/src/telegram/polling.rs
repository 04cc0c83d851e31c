//! Long-polling transport: teloxide Dispatcher feeding message and callback updates to the bot.

use std::sync::Arc;

use anyhow::Result;
use teloxide::{dptree, prelude::*};
use tracing::{info, warn};

use crate::runner::WishBot;

async fn on_update(update: Update, app: Arc<WishBot>) -> ResponseResult<()> {
    app.handle_update(&update).await;
    Ok(())
}

/// Removes any registered webhook (Telegram refuses getUpdates otherwise) and polls until Ctrl-C.
pub async fn run_polling(bot: teloxide::Bot, app: Arc<WishBot>) -> Result<()> {
    if let Err(e) = bot.delete_webhook().await {
        warn!(error = %e, "Failed to delete webhook before polling");
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_update))
        .branch(Update::filter_callback_query().endpoint(on_update));

    info!("Starting long polling");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![app])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Polling stopped");
    Ok(())
}
