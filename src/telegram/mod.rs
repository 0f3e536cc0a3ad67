pub mod gateway;
pub mod markdown;

pub use gateway::{MessageRef, MessagingGateway, TelegramGateway};
