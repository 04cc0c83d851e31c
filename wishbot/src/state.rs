//! Conversation state, derived from membership and the stored record on every event.

use storage::{Language, UserRecord};

use crate::membership::Membership;

/// Where a user is in the flow `Unjoined → AwaitingLanguage → AwaitingName → Ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationState {
    Unjoined,
    AwaitingLanguage,
    AwaitingName { language: Language },
    /// A link exists; further names overwrite it.
    Ready { language: Language, link: String },
}

impl ConversationState {
    /// State of a user whose membership has not been confirmed (or whose check failed) is `Unjoined`.
    pub fn of(membership: &Membership, record: &UserRecord) -> Self {
        if membership.is_member() {
            Self::from_record(record)
        } else {
            ConversationState::Unjoined
        }
    }

    /// State of a confirmed member.
    pub fn from_record(record: &UserRecord) -> Self {
        match (record.language, &record.link) {
            (None, _) => ConversationState::AwaitingLanguage,
            (Some(language), None) => ConversationState::AwaitingName { language },
            (Some(language), Some(link)) => ConversationState::Ready {
                language,
                link: link.clone(),
            },
        }
    }

    /// Language chosen so far, if any.
    pub fn language(&self) -> Option<Language> {
        match self {
            ConversationState::AwaitingName { language }
            | ConversationState::Ready { language, .. } => Some(*language),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConversationState::Unjoined => "unjoined",
            ConversationState::AwaitingLanguage => "awaiting_language",
            ConversationState::AwaitingName { .. } => "awaiting_name",
            ConversationState::Ready { .. } => "ready",
        }
    }
}
