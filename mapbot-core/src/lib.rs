//! # mapbot-core
//!
//! Core types and traits for the city map bot: [`Bot`], [`Handler`], message and user types,
//! and tracing initialization. Transport-agnostic; used by mapbot-telegram, handler-chain and map-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, Photo};
pub use error::{MapbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User,
};
