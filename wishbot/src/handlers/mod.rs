//! Handlers run for every inbound event, in this order: logging, callback acknowledgement,
//! membership gate, conversation.

mod callback_ack;
mod conversation;
mod gate;
mod logging;

pub use callback_ack::CallbackAckHandler;
pub use conversation::ConversationHandler;
pub use gate::MembershipGateHandler;
pub use logging::LoggingHandler;
