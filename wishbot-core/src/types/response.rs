//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the text that was sent so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain; a reply with this text was sent.
    Reply(String),
}
