//! Adapters from Telegram (teloxide) types to mapbot_core types.

use mapbot_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self.content().to_string(),
            message_type: self.message_type().to_string(),
            created_at: self.0.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Text of the message, or the caption for media messages.
    fn content(&self) -> &str {
        self.0.text().or_else(|| self.0.caption()).unwrap_or("")
    }

    fn message_type(&self) -> &'static str {
        if self.0.text().is_some() {
            "text"
        } else if self.0.photo().is_some() {
            "photo"
        } else if self.0.location().is_some() {
            "location"
        } else {
            "other"
        }
    }
}
