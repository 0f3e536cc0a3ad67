use crate::menu::Keyboard;
use crate::types::error::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, InlineKeyboardMarkup, MessageId, ParseMode};
use teloxide::{ApiError, RequestError};
use tracing::debug;

/// An already displayed message that can be edited in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// Outbound side of the messaging platform
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    async fn send(&self, chat_id: ChatId, text: &str, keyboard: &Keyboard) -> Result<()>;

    async fn edit(&self, target: MessageRef, text: &str, keyboard: &Keyboard) -> Result<()>;

    /// Clear the client's loading indicator for a button press
    async fn acknowledge(&self, callback_id: &CallbackQueryId) -> Result<()>;
}

/// Gateway backed by the Telegram Bot API. Screen bodies are HTML.
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl MessagingGateway for TelegramGateway {
    async fn send(&self, chat_id: ChatId, text: &str, keyboard: &Keyboard) -> Result<()> {
        debug!(chat_id = chat_id.0, layout = ?keyboard.layout(), "Sending screen");
        self.bot
            .send_message(chat_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(InlineKeyboardMarkup::from(keyboard))
            .await?;
        Ok(())
    }

    async fn edit(&self, target: MessageRef, text: &str, keyboard: &Keyboard) -> Result<()> {
        debug!(
            chat_id = target.chat_id.0,
            message_id = target.message_id.0,
            layout = ?keyboard.layout(),
            "Editing screen in place"
        );
        let result = self
            .bot
            .edit_message_text(target.chat_id, target.message_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(InlineKeyboardMarkup::from(keyboard))
            .await;

        match result {
            Ok(_) => Ok(()),
            // Repeated press on the button that produced the current screen
            Err(RequestError::Api(ApiError::MessageNotModified)) => {
                debug!(
                    chat_id = target.chat_id.0,
                    message_id = target.message_id.0,
                    "Screen already displayed"
                );
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn acknowledge(&self, callback_id: &CallbackQueryId) -> Result<()> {
        self.bot.answer_callback_query(callback_id.clone()).await?;
        Ok(())
    }
}
