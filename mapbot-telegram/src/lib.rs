//! # mapbot-telegram
//!
//! Telegram layer: adapters, [`mapbot_core::Bot`] implementation and the REPL runner.
//! Handles only Telegram connectivity and handler-chain execution; commands live in map-handlers.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::{fetch_bot_username, run_repl};
