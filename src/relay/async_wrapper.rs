//! Async seam around the synchronous TelegramClient.
//!
//! The submission pipeline depends on the [`Relay`] trait so tests can swap
//! in a fake. [`TelegramRelay`] runs the blocking HTTP call on tokio's
//! blocking pool.

use crate::error::{RelayError, RelayResult};
use crate::relay::TelegramClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Something that can deliver one formatted notification.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn send(&self, text: &str) -> RelayResult<()>;
}

/// Async wrapper around synchronous TelegramClient.
#[derive(Clone)]
pub struct TelegramRelay {
    client: Arc<TelegramClient>,
}

impl TelegramRelay {
    pub fn new(client: TelegramClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl Relay for TelegramRelay {
    async fn send(&self, text: &str) -> RelayResult<()> {
        let client = self.client.clone();
        let text = text.to_string();

        tokio::task::spawn_blocking(move || client.send_message(&text))
            .await
            .map_err(|e| RelayError::TaskFailed(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TelegramSettings;

    #[tokio::test]
    async fn test_telegram_relay_creation() {
        let settings = TelegramSettings {
            api_url: "https://api.telegram.org".to_string(),
            bot_token: "123:abc".to_string(),
            chat_id: "42".to_string(),
            request_timeout: 10,
        };
        let relay = TelegramRelay::new(TelegramClient::new(&settings));

        // Should be able to clone and share as a trait object
        let _shared: Arc<dyn Relay> = Arc::new(relay.clone());
    }

    #[tokio::test]
    async fn test_unreachable_api_is_an_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let client = TelegramClient::with_timeout(
            "http://127.0.0.1:9".to_string(),
            "123:abc".to_string(),
            "42".to_string(),
            std::time::Duration::from_secs(2),
        );
        let relay = TelegramRelay::new(client);

        let result = relay.send("hello").await;
        tokio_test::assert_err!(result);
    }
}
