//! Bot configuration: BaseConfig (Telegram + log) + WishConfig (channel, store, link bases, webhook).

mod base;
mod bot_config;
mod wish;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use wish::{ChannelId, WishConfig, DEFAULT_CHANNEL_ID, DEFAULT_CHANNEL_LINK, DEFAULT_DATA_FILE};
