//! In-memory transport that records every outbound call.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use vocabot_config::Config;
use vocabot_core::{Destination, VocabStore, VocabularyEntry};
use vocabot_telegram::{
    Chat, ChatKind, ChatTransport, Message, ParseMode, TransportError, Update, User,
};

use crate::state::AppContext;

pub const BOT_USERNAME: &str = "VocabBot";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Send {
        destination: Destination,
        text: String,
        parse_mode: Option<ParseMode>,
        message_id: i32,
    },
    Pin {
        chat_id: i64,
        message_id: i32,
        silent: bool,
    },
}

#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    next_message_id: AtomicI32,
    /// Sends whose text contains this fail with an API error
    fail_send_containing: Option<String>,
    fail_pins: bool,
    updates: Mutex<VecDeque<Vec<Update>>>,
    offsets: Mutex<Vec<Option<i64>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_send_containing(needle: &str) -> Self {
        Self {
            fail_send_containing: Some(needle.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_pins() -> Self {
        Self {
            fail_pins: true,
            ..Self::default()
        }
    }

    pub fn with_updates(batches: Vec<Vec<Update>>) -> Self {
        Self {
            updates: Mutex::new(batches.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn offsets(&self) -> Vec<Option<i64>> {
        self.offsets.lock().unwrap().clone()
    }

    /// Texts of MarkdownV2 sends, i.e. delivered entries
    pub fn delivered(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Send {
                    text,
                    parse_mode: Some(ParseMode::MarkdownV2),
                    ..
                } => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Texts of plain sends, i.e. notices
    pub fn notices(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Send {
                    text,
                    parse_mode: None,
                    ..
                } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn pins(&self) -> Vec<i32> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Pin { message_id, .. } => Some(message_id),
                _ => None,
            })
            .collect()
    }

    fn api_error(description: &str) -> TransportError {
        TransportError::Api {
            code: 400,
            description: description.to_string(),
        }
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn get_me(&self) -> Result<User, TransportError> {
        Ok(User {
            username: Some(BOT_USERNAME.to_string()),
        })
    }

    async fn get_updates(
        &self,
        offset: Option<i64>,
        _timeout_secs: u64,
    ) -> Result<Vec<Update>, TransportError> {
        self.offsets.lock().unwrap().push(offset);
        let next = self.updates.lock().unwrap().pop_front();
        match next {
            Some(batch) => Ok(batch),
            None => {
                tokio::time::sleep(Duration::from_millis(20)).await;
                Ok(vec![])
            }
        }
    }

    async fn send_message(
        &self,
        destination: Destination,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<Message, TransportError> {
        if let Some(needle) = &self.fail_send_containing
            && text.contains(needle.as_str())
        {
            return Err(Self::api_error("Bad Request: can't parse entities"));
        }

        let message_id = self.next_message_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.calls.lock().unwrap().push(Call::Send {
            destination,
            text: text.to_string(),
            parse_mode,
            message_id,
        });

        Ok(Message {
            message_id,
            message_thread_id: destination.thread_id,
            chat: Chat {
                id: destination.chat_id,
                kind: ChatKind::Supergroup,
            },
            text: Some(text.to_string()),
        })
    }

    async fn pin_message(
        &self,
        chat_id: i64,
        message_id: i32,
        silent: bool,
    ) -> Result<(), TransportError> {
        if self.fail_pins {
            return Err(Self::api_error("Bad Request: not enough rights"));
        }

        self.calls.lock().unwrap().push(Call::Pin {
            chat_id,
            message_id,
            silent,
        });
        Ok(())
    }
}

pub fn entry(phrase: &str) -> VocabularyEntry {
    VocabularyEntry::new(phrase, format!("meaning of {phrase}"))
}

pub fn numbered_store(count: usize) -> VocabStore {
    VocabStore::new((0..count).map(|i| entry(&format!("word{i}"))).collect())
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.delivery.delay_ms = 0;
    config
}

pub fn context(store: VocabStore, transport: Arc<RecordingTransport>) -> Arc<AppContext> {
    Arc::new(AppContext::new(test_config(), store, BOT_USERNAME, transport))
}

pub fn text_update(update_id: i64, chat_id: i64, kind: ChatKind, text: &str) -> Update {
    Update {
        update_id,
        message: Some(Message {
            message_id: 1000 + update_id as i32,
            message_thread_id: None,
            chat: Chat { id: chat_id, kind },
            text: Some(text.to_string()),
        }),
    }
}
