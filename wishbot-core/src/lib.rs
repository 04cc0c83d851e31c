//! # wishbot-core
//!
//! Core types and traits for the birthday-wish bot: [`Bot`], [`Handler`], message, reply and keyboard
//! types, errors and tracing initialization. Transport-agnostic; the teloxide side lives in `wishbot::telegram`.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{HandlerError, Result, WishBotError};
pub use logger::init_tracing;
pub use types::{
    ButtonAction, Chat, Handler, HandlerResponse, InlineButton, InlineKeyboard, Message,
    MessageKind, Reply, TextFormat, ToCoreMessage, ToCoreUser, User,
};
