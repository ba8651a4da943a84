//! # Handler chain
//!
//! Runs every handler's `before` in order, then `handle` until one returns Stop or Reply,
//! then every `after` in reverse order with the final response.

use mapbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered handlers for one incoming message.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop/Reply ends the handle phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the three phases. Returns the first Stop or Reply, or Continue when no handler claimed the message.
    /// A `before` returning false returns Stop immediately, without handle or after.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            if !handler.before(message).await? {
                info!(
                    user_id = message.user.id,
                    handler = %handler_name,
                    "step: handler before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
            debug!(handler = %handler_name, "step: handler before done");
        }

        let mut final_response = HandlerResponse::Continue;
        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            let (response_type, reply_len) = match &response {
                HandlerResponse::Continue => ("Continue", None),
                HandlerResponse::Stop => ("Stop", None),
                HandlerResponse::Ignore => ("Ignore", None),
                HandlerResponse::Reply(s) => ("Reply", Some(s.len())),
            };
            info!(
                user_id = message.user.id,
                handler = %handler_name,
                response_type = %response_type,
                reply_len = ?reply_len,
                "step: handler done"
            );

            if matches!(response, HandlerResponse::Stop | HandlerResponse::Reply(_)) {
                info!(user_id = message.user.id, "step: handler chain stopped by handler");
                final_response = response;
                break;
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(message, &final_response).await?;
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}
