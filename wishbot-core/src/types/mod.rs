//! Core types: user, chat, message, reply, inline keyboard, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod handler;
mod keyboard;
mod message;
mod reply;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use keyboard::{ButtonAction, InlineButton, InlineKeyboard};
pub use message::{Message, MessageKind};
pub use reply::{Reply, TextFormat};
pub use response::HandlerResponse;
pub use user::User;
