//! Bot configuration: BaseConfig (Telegram + log + DB) + MapConfig (rendering and output).

mod base;
mod bot_config;
mod map;


pub use base::{database_url_from_env, BaseConfig};
pub use bot_config::BotConfig;
pub use map::MapConfig;
