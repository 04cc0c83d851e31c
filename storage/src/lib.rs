//! Storage crate: per-user conversation records and store implementations.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – UserRecord, Language, RecordUpdate
//! - [`repository`] – UserStore trait
//! - [`json_store`] – JsonFileStore (one JSON document on disk)
//! - [`memory_store`] – InMemoryStore

mod error;
mod json_store;
mod memory_store;
mod models;
mod repository;

pub use error::StorageError;
pub use json_store::JsonFileStore;
pub use memory_store::InMemoryStore;
pub use models::{Language, RecordUpdate, UserRecord};
pub use repository::UserStore;
