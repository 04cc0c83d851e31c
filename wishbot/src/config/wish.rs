//! Wish-bot settings: gate channel, user data store, wish-page bases and webhook binding.

use anyhow::Result;
use std::env;
use std::net::SocketAddr;

use crate::link::{BN_SITE, EN_SITE};

pub const DEFAULT_CHANNEL_ID: &str = "@nextgentech_bd";
pub const DEFAULT_CHANNEL_LINK: &str = "https://t.me/nextgentech_bd";
pub const DEFAULT_DATA_FILE: &str = "user_data.json";
const DEFAULT_WEBHOOK_ADDR: &str = "0.0.0.0:8000";

/// Channel whose membership gates the bot: `@username` or numeric chat id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelId {
    /// Includes the leading `@`.
    Username(String),
    Id(i64),
}

impl ChannelId {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw.strip_prefix('@') {
            Some(name) if !name.is_empty() => Some(ChannelId::Username(raw.to_string())),
            Some(_) => None,
            None => raw.parse().ok().map(ChannelId::Id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WishConfig {
    /// CHANNEL_ID
    pub channel_id: String,
    /// CHANNEL_LINK; target of the join button.
    pub channel_link: String,
    /// DATA_FILE; JSON user store path.
    pub data_file: String,
    /// STORE_TYPE: `json` or `memory`.
    pub store_type: String,
    /// EN_SITE
    pub en_site: String,
    /// BN_SITE
    pub bn_site: String,
    /// WEBHOOK_ADDR; bind address in webhook mode.
    pub webhook_addr: String,
    /// WEBHOOK_URL; registered with setWebhook on startup when set.
    pub webhook_url: Option<String>,
}

impl WishConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            channel_id: env::var("CHANNEL_ID").unwrap_or_else(|_| DEFAULT_CHANNEL_ID.to_string()),
            channel_link: env::var("CHANNEL_LINK")
                .unwrap_or_else(|_| DEFAULT_CHANNEL_LINK.to_string()),
            data_file: env::var("DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string()),
            store_type: env::var("STORE_TYPE")
                .map(|s| s.trim().to_lowercase())
                .unwrap_or_else(|_| "json".to_string()),
            en_site: env::var("EN_SITE").unwrap_or_else(|_| EN_SITE.to_string()),
            bn_site: env::var("BN_SITE").unwrap_or_else(|_| BN_SITE.to_string()),
            webhook_addr: env::var("WEBHOOK_ADDR")
                .unwrap_or_else(|_| DEFAULT_WEBHOOK_ADDR.to_string()),
            webhook_url: env::var("WEBHOOK_URL")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        })
    }

    pub fn channel(&self) -> Result<ChannelId> {
        ChannelId::parse(&self.channel_id).ok_or_else(|| {
            anyhow::anyhow!(
                "CHANNEL_ID must be @username or a numeric chat id, got: {}",
                self.channel_id
            )
        })
    }

    pub fn webhook_socket_addr(&self) -> Result<SocketAddr> {
        self.webhook_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("WEBHOOK_ADDR is not a socket address ({}): {}", e, self.webhook_addr))
    }

    pub fn validate(&self) -> Result<()> {
        self.channel()?;
        self.webhook_socket_addr()?;
        if reqwest::Url::parse(&self.channel_link).is_err() {
            anyhow::bail!("CHANNEL_LINK is not a valid URL: {}", self.channel_link);
        }
        if let Some(ref url) = self.webhook_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("WEBHOOK_URL is not a valid URL: {}", url);
            }
        }
        match self.store_type.as_str() {
            "json" | "memory" => Ok(()),
            other => anyhow::bail!("STORE_TYPE must be json or memory, got: {}", other),
        }
    }
}
