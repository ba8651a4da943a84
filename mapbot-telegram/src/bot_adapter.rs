//! Wraps teloxide::Bot and implements [`mapbot_core::Bot`]. Tests substitute another Bot impl.

use async_trait::async_trait;
use mapbot_core::{Bot as CoreBot, Chat, MapbotError, Photo, Result};
use teloxide::{prelude::*, types::ChatId, types::InputFile};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements mapbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn input_file(photo: Photo) -> InputFile {
    match photo {
        Photo::Bytes { data, file_name } => InputFile::memory(data).file_name(file_name),
        Photo::File(path) => InputFile::file(path),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| MapbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo: Photo, caption: Option<&str>) -> Result<()> {
        debug!(chat_id = chat.id, file_name = %photo.file_name(), "Sending photo");
        let request = self.bot.send_photo(ChatId(chat.id), input_file(photo));
        let request = match caption {
            Some(caption) => request.caption(caption.to_string()),
            None => request,
        };
        request.await.map_err(|e| MapbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
