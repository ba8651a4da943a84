//! Chat command handlers for the city map bot.
//!
//! - [`commands`] – command parsing and [`CommandError`]
//! - [`session`] – per-user marker color and points
//! - [`MapCommandHandler`] – runs commands against the directory and renderer
//! - [`LoggingHandler`] – logs every message and its outcome

pub mod commands;
mod logging_handler;
mod map_handler;
pub mod session;

pub use commands::{Command, CommandError};
pub use logging_handler::LoggingHandler;
pub use map_handler::MapCommandHandler;
pub use session::{Session, SessionStore};
