use async_trait::async_trait;
use vocabot_core::Destination;

use crate::types::{Message, ParseMode, Update, User};

/// Outbound chat operations the bot relies on
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Identity of the bot account
    async fn get_me(&self) -> Result<User, TransportError>;

    /// Long-poll for updates with id >= `offset`
    async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TransportError>;

    /// Send a text message, optionally into a forum topic
    async fn send_message(
        &self,
        destination: Destination,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<Message, TransportError>;

    /// Pin a message; `silent` suppresses the notification
    async fn pin_message(
        &self,
        chat_id: i64,
        message_id: i32,
        silent: bool,
    ) -> Result<(), TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {code}: {description}")]
    Api { code: i32, description: String },

    #[error("{method} returned no result")]
    MissingResult { method: String },
}
