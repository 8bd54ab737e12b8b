use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use vocabot_core::Destination;

use crate::transport::{ChatTransport, TransportError};
use crate::types::{Message, ParseMode, Update, User};

/// Bot API client over HTTPS
#[derive(Clone)]
pub struct TelegramClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl TelegramClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Invoke a Bot API method
    async fn invoke<T, P>(&self, method: &str, params: &P) -> Result<T, TransportError>
    where
        T: for<'de> Deserialize<'de>,
        P: Serialize + ?Sized,
    {
        tracing::trace!(method, "Calling Bot API");

        // Failures come back as a JSON envelope with a 4xx status
        let response: ApiResponse<T> = self
            .client
            .post(self.method_url(method))
            .json(params)
            .send()
            .await?
            .json()
            .await?;

        response.into_result(method)
    }
}

#[async_trait]
impl ChatTransport for TelegramClient {
    async fn get_me(&self) -> Result<User, TransportError> {
        self.invoke("getMe", &json!({})).await
    }

    async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TransportError> {
        let params = GetUpdates {
            offset,
            timeout: timeout_secs,
            allowed_updates: &["message"],
        };
        self.invoke("getUpdates", &params).await
    }

    async fn send_message(
        &self,
        destination: Destination,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<Message, TransportError> {
        let params = SendMessage {
            chat_id: destination.chat_id,
            text,
            message_thread_id: destination.thread_id,
            parse_mode,
        };
        self.invoke("sendMessage", &params).await
    }

    async fn pin_message(
        &self,
        chat_id: i64,
        message_id: i32,
        silent: bool,
    ) -> Result<(), TransportError> {
        let params = json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "disable_notification": silent,
        });
        let _: bool = self.invoke("pinChatMessage", &params).await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct GetUpdates<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u64,
    allowed_updates: &'a [&'a str],
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_thread_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<ParseMode>,
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
    error_code: Option<i32>,
}

impl<T> ApiResponse<T> {
    fn into_result(self, method: &str) -> Result<T, TransportError> {
        if !self.ok {
            return Err(TransportError::Api {
                code: self.error_code.unwrap_or_default(),
                description: self.description.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        self.result.ok_or_else(|| TransportError::MissingResult {
            method: method.to_string(),
        })
    }
}
