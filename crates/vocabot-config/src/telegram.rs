use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_timeout_seconds() -> u64 {
    30
}

fn default_poll_retry_ms() -> u64 {
    5000
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot API token, required to start
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Long-poll timeout passed to getUpdates
    #[serde(default = "default_poll_timeout_seconds")]
    pub poll_timeout_seconds: u64,
    /// Back-off after a failed getUpdates call
    #[serde(default = "default_poll_retry_ms")]
    pub poll_retry_ms: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: default_api_url(),
            poll_timeout_seconds: default_poll_timeout_seconds(),
            poll_retry_ms: default_poll_retry_ms(),
        }
    }
}

impl TelegramConfig {
    pub fn new() -> Self {
        let token = env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        let api_url = env::var("TELEGRAM_API_URL").unwrap_or_else(|_| default_api_url());

        Self {
            token,
            api_url,
            poll_timeout_seconds: env_or("POLL_TIMEOUT_SECONDS", default_poll_timeout_seconds()),
            poll_retry_ms: env_or("POLL_RETRY_MS", default_poll_retry_ms()),
        }
    }

    pub fn poll_retry(&self) -> Duration {
        Duration::from_millis(self.poll_retry_ms)
    }
}
