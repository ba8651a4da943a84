//! # mapbot-cli
//!
//! CLI foundation and wiring: argument parsing, config loading, building the handler chain.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{
    build_handler_chain, build_renderer, open_directory, render_cities, resolve_output, run_bot,
    seed_cities,
};
pub use cli::{Cli, Commands};
pub use config::{BaseConfig, BotConfig, MapConfig};
