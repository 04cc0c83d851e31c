//! Error types for the bot core.
//!
//! [`WishBotError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error: user store, bot transport or handler.
#[derive(Error, Debug)]
pub enum WishBotError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Unknown callback data: {0}")]
    UnknownCallback(String),
}

/// Result type for core operations; uses [`WishBotError`].
pub type Result<T> = std::result::Result<T, WishBotError>;
