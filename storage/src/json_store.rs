//! JSON file store: every user record in one JSON object on disk, keyed by stringified user id.
//!
//! Each access reads the whole document; each write rewrites it. Writes go to a sibling `*.tmp`
//! file that is renamed over the data file. Read-modify-write cycles are serialized by one async
//! mutex, so concurrent updates inside one process are not lost. Several processes sharing the file
//! are not supported.
//!
//! Entries are decoded one user at a time: an entry that does not decode reads as an empty record
//! for that user only, and every other entry is written back untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::error::StorageError;
use crate::models::{RecordUpdate, UserRecord};
use crate::repository::UserStore;

/// Raw document: user id string to the undecoded entry.
type UserMap = BTreeMap<String, Value>;

fn decode_entry(key: &str, entry: Value) -> UserRecord {
    serde_json::from_value(entry).unwrap_or_else(|e| {
        warn!(user_id = %key, error = %e, "Unreadable user entry, treating as empty");
        UserRecord::default()
    })
}

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating parent directories and an empty `{}` document if the file is missing.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if !fs::try_exists(&path).await? {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).await?;
                }
            }
            fs::write(&path, b"{}").await?;
            info!(path = %path.display(), "Created empty user data file");
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<UserMap, StorageError> {
        let bytes = fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_all(&self, users: &UserMap) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(users)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), users = users.len(), "User data file rewritten");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    #[instrument(skip(self))]
    async fn get(&self, user_id: i64) -> Result<UserRecord, StorageError> {
        let key = user_id.to_string();
        let mut users = self.read_all().await?;
        Ok(users
            .remove(&key)
            .map(|entry| decode_entry(&key, entry))
            .unwrap_or_default())
    }

    #[instrument(skip(self, record))]
    async fn save(&self, user_id: i64, record: &UserRecord) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.read_all().await?;
        users.insert(user_id.to_string(), serde_json::to_value(record)?);
        self.write_all(&users).await
    }

    #[instrument(skip(self))]
    async fn update(&self, user_id: i64, update: RecordUpdate) -> Result<UserRecord, StorageError> {
        let key = user_id.to_string();
        let _guard = self.write_lock.lock().await;
        let mut users = self.read_all().await?;
        let mut record = users
            .remove(&key)
            .map(|entry| decode_entry(&key, entry))
            .unwrap_or_default();
        update.apply(&mut record);
        users.insert(key, serde_json::to_value(&record)?);
        self.write_all(&users).await?;
        Ok(record)
    }
}
