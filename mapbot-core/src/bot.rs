//! Bot abstraction for sending text replies and map images.
//!
//! [`Bot`] is transport-agnostic; mapbot-telegram implements it via teloxide.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;
use std::path::PathBuf;

/// An image to deliver to a chat: either rendered bytes held in memory or a file already on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Photo {
    /// Encoded image bytes; `file_name` is what the chat client shows.
    Bytes { data: Vec<u8>, file_name: String },
    /// Path to an encoded image file.
    File(PathBuf),
}

impl Photo {
    /// In-memory PNG with the given display name.
    pub fn png(data: Vec<u8>, file_name: impl Into<String>) -> Self {
        Photo::Bytes {
            data,
            file_name: file_name.into(),
        }
    }

    /// Display name of the photo (file name for paths).
    pub fn file_name(&self) -> String {
        match self {
            Photo::Bytes { file_name, .. } => file_name.clone(),
            Photo::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}

/// Abstraction for sending messages and photos. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a photo with an optional caption.
    async fn send_photo(&self, chat: &Chat, photo: Photo, caption: Option<&str>) -> Result<()>;
}
