use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum BotError {
    #[error("Telegram API error: {message}")]
    TelegramError { message: String },

    #[error("Dangling menu action: screen {screen} links to unresolved action {action}")]
    DanglingAction { screen: String, action: String },
}

impl BotError {
    /// Returns true if the error came from the platform rather than from a
    /// broken menu definition. Endpoints log these at WARN; a user can simply
    /// press the button again.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TelegramError { .. })
    }

    pub fn telegram_error(message: impl Into<String>) -> Self {
        Self::TelegramError {
            message: message.into(),
        }
    }

    pub fn dangling_action(screen: impl Into<String>, action: impl Into<String>) -> Self {
        Self::DanglingAction {
            screen: screen.into(),
            action: action.into(),
        }
    }
}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        Self::telegram_error(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
