//! User record model for persistence.
//!
//! Serialized as one entry of the data file: `{"language": "bn", "name": "...", "link": "..."}` with
//! absent fields omitted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language of the wish page. Serialized lowercase; the same strings are the language button callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Bn,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Bn => "bn",
            Language::En => "en",
        }
    }

    /// Parses callback data / stored value; `None` for anything other than `bn` or `en`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bn" => Some(Language::Bn),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Last submitted recipient name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Last generated wish link; derived from `language` and `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl UserRecord {
    pub fn is_empty(&self) -> bool {
        self.language.is_none() && self.name.is_none() && self.link.is_none()
    }
}

/// One atomic change to a user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordUpdate {
    /// Language chosen; name and link are kept.
    SetLanguage(Language),
    /// Name submitted and link generated; language is kept.
    SetWish { name: String, link: String },
}

impl RecordUpdate {
    pub fn apply(self, record: &mut UserRecord) {
        match self {
            RecordUpdate::SetLanguage(language) => record.language = Some(language),
            RecordUpdate::SetWish { name, link } => {
                record.name = Some(name);
                record.link = Some(link);
            }
        }
    }
}
