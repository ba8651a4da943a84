//! REPL runner: converts teloxide messages to core [`Message`](mapbot_core::Message) and passes
//! them to the [`HandlerChain`], one spawned task per message.

use anyhow::Result;
use handler_chain::HandlerChain;
use mapbot_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use crate::adapters::TelegramMessageWrapper;

/// Bot's own username via getMe, used to accept `/command@username`. None when the call fails.
pub async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            if let Some(name) = &username {
                info!(username = %name, "Bot username resolved");
            }
            username
        }
        Err(e) => {
            warn!(error = %e, "getMe failed, commands addressed to any bot will be accepted");
            None
        }
    }
}

/// Starts the teloxide REPL. Each message runs through `handler_chain` in its own task
/// so a slow command does not hold up other chats.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    info!("Starting Telegram REPL");

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            if msg.text().is_none() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_type = %core_msg.message_type,
                    "Received non-text message"
                );
            }

            tokio::spawn(async move {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_id = %core_msg.id,
                    "step: processing message (handler chain started)"
                );
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
