//! Telegram layer: update adapters, teloxide-backed Bot and membership checker, polling and webhook transports.

mod adapters;
mod bot_adapter;
mod membership;
mod polling;
mod webhook;

pub use adapters::{parse_command, TelegramUpdateWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use membership::TelegramMembershipChecker;
pub use polling::run_polling;
pub use webhook::{run_webhook, webhook_router};
