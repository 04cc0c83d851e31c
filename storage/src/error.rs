//! Storage error types.
//!
//! Used by store implementations and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when reading or writing user records.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Data file missing, unreadable or not writable.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Data file is not a JSON object of user records.
    #[error("Malformed data file: {0}")]
    Json(#[from] serde_json::Error),
}
