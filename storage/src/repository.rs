use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{RecordUpdate, UserRecord};

/// Per-user record store keyed by Telegram user id.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Record for `user_id`, or an empty record if the user has none yet.
    async fn get(&self, user_id: i64) -> Result<UserRecord, StorageError>;

    /// Replaces (or inserts) the whole record for `user_id`.
    async fn save(&self, user_id: i64, record: &UserRecord) -> Result<(), StorageError>;

    /// Applies `update` to the current record as one read-modify-write and returns the record as written.
    async fn update(&self, user_id: i64, update: RecordUpdate) -> Result<UserRecord, StorageError>;
}
