//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;
use crate::runner::TransportMode;

#[derive(Parser)]
#[command(name = "wishbot")]
#[command(about = "Birthday-wish Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; flags override).
    Run {
        /// Overrides BOT_TOKEN.
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long, value_enum, default_value_t = TransportMode::Polling)]
        mode: TransportMode,
        /// Overrides WEBHOOK_ADDR.
        #[arg(short, long)]
        addr: Option<String>,
    },
}

/// Load BotConfig from environment. `token` overrides BOT_TOKEN, `addr` overrides WEBHOOK_ADDR.
pub fn load_config(token: Option<String>, addr: Option<String>) -> Result<BotConfig> {
    let mut config = BotConfig::load(token)?;
    if let Some(addr) = addr {
        config.wish.webhook_addr = addr;
    }
    Ok(config)
}
