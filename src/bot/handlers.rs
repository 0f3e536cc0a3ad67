use crate::types::error::BotError;
use tracing::{error, warn};

pub mod callbacks;
pub mod commands;

pub use callbacks::dispatch_callback;
pub use commands::handle_command;

/// Top-level sink for handler failures. Platform errors are not retried; the
/// user can press the button again.
pub fn log_handler_error(context: &str, err: &BotError) {
    if err.is_transient() {
        warn!(context = context, error = %err, "Handler failed");
    } else {
        error!(context = context, error = %err, "Handler failed");
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_handler_error_accepts_both_kinds() {
        log_handler_error("callback", &BotError::telegram_error("timeout"));
        log_handler_error("startup", &BotError::dangling_action("start", "buy"));
    }

    #[test]
    fn test_fixtures_deserialize() {
        let q = fixtures::callback(Some("plans"), Some(7));
        assert_eq!(q.data.as_deref(), Some("plans"));
        assert!(q.message.is_some());

        let msg = fixtures::message("/start");
        assert_eq!(msg.chat.id.0, fixtures::CHAT_ID);
        assert_eq!(msg.text(), Some("/start"));
    }
}
