mod commands;
pub mod handlers;
mod state;

pub use commands::Command;
pub use handlers::{dispatch_callback, handle_command, log_handler_error};
pub use state::BotState;
