//! BotConfig: BaseConfig + MapConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, MapConfig};

/// Bot config: BaseConfig + map settings. Call validate() after load to fail fast before init.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub map: MapConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let map = MapConfig::from_env();
        Ok(Self { base, map })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.map.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn map(&self) -> &MapConfig {
        &self.map
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
