//! Channel membership: the result of asking the platform whether a user belongs to the gate channel.

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership {
    /// Creator, administrator or plain member.
    Member,
    /// Left, kicked, restricted, or never joined.
    NotMember,
    /// The platform call failed; holds the error text.
    CheckFailed(String),
}

impl Membership {
    pub fn is_member(&self) -> bool {
        matches!(self, Membership::Member)
    }
}

/// Looks up membership of a user in the configured channel. Never errors: failures are `CheckFailed`.
#[async_trait]
pub trait MembershipChecker: Send + Sync {
    async fn check(&self, user_id: i64) -> Membership;
}
