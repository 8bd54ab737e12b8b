mod client;
mod transport;
pub mod types;

pub use client::TelegramClient;
pub use transport::{ChatTransport, TransportError};
pub use types::{Chat, ChatKind, Message, ParseMode, Update, User};
