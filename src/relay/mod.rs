//! HTTP client for relaying notifications to the Telegram Bot API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client sends one `sendMessage` call per
//! notification and maps every way that call can go wrong onto [`RelayError`].

mod async_wrapper;
pub use async_wrapper::{Relay, TelegramRelay};

use crate::config::TelegramSettings;
use crate::error::{RelayError, RelayResult};
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Rendering hint sent with every message.
pub const PARSE_MODE: &str = "HTML";

/// Body of a `sendMessage` call.
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// The part of a Bot API reply we care about.
#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,

    #[serde(default)]
    description: Option<String>,
}

/// Result of one relay attempt, reduced to what shapes the HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOutcome {
    pub delivered: bool,
    pub reason: Option<String>,
}

impl From<RelayResult<()>> for RelayOutcome {
    fn from(result: RelayResult<()>) -> Self {
        match result {
            Ok(()) => Self {
                delivered: true,
                reason: None,
            },
            Err(e) => Self {
                delivered: false,
                reason: Some(e.to_string()),
            },
        }
    }
}

/// HTTP client for one Telegram bot and chat.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct TelegramClient {
    /// Bot API base URL
    api_url: String,

    /// Bot token (secret, part of the request path)
    bot_token: String,

    /// Destination chat
    chat_id: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl TelegramClient {
    /// Create a new TelegramClient from configuration.
    pub fn new(settings: &TelegramSettings) -> Self {
        Self::with_timeout(
            settings.api_url.clone(),
            settings.bot_token.clone(),
            settings.chat_id.clone(),
            Duration::from_secs(settings.request_timeout),
        )
    }

    /// Create a TelegramClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(api_url: String, bot_token: String, chat_id: String) -> Self {
        Self::with_timeout(api_url, bot_token, chat_id, Duration::from_secs(10))
    }

    /// Create a TelegramClient with an explicit overall request timeout.
    pub fn with_timeout(
        api_url: String,
        bot_token: String,
        chat_id: String,
        timeout: Duration,
    ) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            api_url,
            bot_token,
            chat_id,
            agent: Arc::new(agent),
        }
    }

    /// URL of the `sendMessage` operation.
    fn send_message_url(&self) -> String {
        let base = self.api_url.trim_end_matches('/');
        format!("{}/bot{}/sendMessage", base, self.bot_token)
    }

    /// Send one message to the configured chat.
    ///
    /// Succeeds only when the API replies with `"ok": true`.
    pub fn send_message(&self, text: &str) -> RelayResult<()> {
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: PARSE_MODE,
        };

        tracing::debug!(chars = text.chars().count(), "sendMessage");

        let response = self
            .agent
            .post(&self.send_message_url())
            .set("Content-Type", "application/json")
            .send_json(&request)
            .map_err(|e| self.map_error(e))?;

        let body = response.into_string().map_err(|e| self.map_io_error(e))?;
        let reply: SendMessageResponse = serde_json::from_str(&body)?;

        if reply.ok {
            Ok(())
        } else {
            Err(RelayError::Rejected(
                reply
                    .description
                    .unwrap_or_else(|| "Telegram API returned error".to_string()),
            ))
        }
    }

    /// Map a ureq error to a RelayError.
    fn map_error(&self, error: ureq::Error) -> RelayError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                // Bot API errors carry a JSON description
                let message = serde_json::from_str::<SendMessageResponse>(&body)
                    .ok()
                    .and_then(|r| r.description)
                    .unwrap_or(body);

                RelayError::ApiError {
                    status: code,
                    message: self.redact(&message),
                }
            }
            ureq::Error::Transport(transport) => {
                if is_timeout(&transport) {
                    RelayError::Timeout
                } else if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    RelayError::HttpError("Connection failed".to_string())
                } else {
                    RelayError::HttpError(self.redact(&transport.to_string()))
                }
            }
        }
    }

    fn map_io_error(&self, error: io::Error) -> RelayError {
        match error.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => RelayError::Timeout,
            _ => RelayError::HttpError(self.redact(&error.to_string())),
        }
    }

    /// Transport errors echo the request URL, which contains the token.
    fn redact(&self, message: &str) -> String {
        message.replace(&self.bot_token, "<redacted>")
    }
}

fn is_timeout(transport: &ureq::Transport) -> bool {
    std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .map(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock))
        .unwrap_or(false)
}
