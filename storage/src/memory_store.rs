//! # In-memory user store
//!
//! Keeps records in a `HashMap` behind `Arc<RwLock<>>`. Data is lost on restart; used by tests and by
//! `STORE_TYPE=memory`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::models::{RecordUpdate, UserRecord};
use crate::repository::UserStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: Arc<RwLock<HashMap<i64, UserRecord>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a record.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn get(&self, user_id: i64) -> Result<UserRecord, StorageError> {
        Ok(self
            .users
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, user_id: i64, record: &UserRecord) -> Result<(), StorageError> {
        self.users.write().await.insert(user_id, record.clone());
        Ok(())
    }

    async fn update(&self, user_id: i64, update: RecordUpdate) -> Result<UserRecord, StorageError> {
        let mut users = self.users.write().await;
        let record = users.entry(user_id).or_default();
        update.apply(record);
        Ok(record.clone())
    }
}
