//! BotConfig: BaseConfig + WishConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, WishConfig};

/// Bot config: BaseConfig + wish settings. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub wish: WishConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let wish = WishConfig::from_env()?;
        Ok(Self { base, wish })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.wish.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn wish(&self) -> &WishConfig {
        &self.wish
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn data_file(&self) -> &str {
        &self.wish.data_file
    }
    pub fn store_type(&self) -> &str {
        &self.wish.store_type
    }
}
