//! # Handler chain
//!
//! Runs a sequence of handlers for each inbound event. All `before` hooks run in order (any false stops
//! the chain, e.g. the membership gate); then `handle` runs until one returns Stop or Reply; then all
//! `after` hooks run in reverse with the final response.

use std::sync::Arc;
use tracing::{debug, info, instrument};
use wishbot_core::{Handler, HandlerResponse, Message, Result};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Short names of the handlers, in run order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| short_name(h.name())).collect()
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse.
    ///
    /// An error from any hook aborts the run and is returned as-is; remaining hooks are skipped.
    #[instrument(skip(self, message), fields(user_id = message.user.id, kind = message.kind_label()))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            kind = message.kind_label(),
            "step: handler_chain started"
        );

        for h in &self.handlers {
            let name = short_name(h.name());
            debug!(user_id = message.user.id, handler = %name, "step: handler before");
            if !h.before(message).await? {
                info!(
                    user_id = message.user.id,
                    handler = %name,
                    "step: before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let name = short_name(h.name());
            let response = h.handle(message).await?;
            debug!(user_id = message.user.id, handler = %name, response = ?response, "step: handler handle done");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(
                        user_id = message.user.id,
                        handler = %name,
                        "step: handler chain stopped by handler"
                    );
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            response = ?final_response,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}

/// `wishbot::handlers::gate::MembershipGateHandler` → `MembershipGateHandler`.
fn short_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}


// Chain behaviour tests live in tests/handler_chain_test.rs
