//! Storage models: user record, wish language, record updates.

mod user_record;

pub use user_record::{Language, RecordUpdate, UserRecord};
