//! Configuration management for the contact relay.
//!
//! This module handles loading and validating configuration from environment variables.
//! The resulting [`Config`] is immutable and handed to the server at startup.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Configuration for the contact relay.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on (default: 3000)
    pub port: u16,

    /// Telegram bot token (secret)
    pub telegram_bot_token: Option<String>,

    /// Telegram destination chat id (secret)
    pub telegram_chat_id: Option<String>,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Outbound request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Business name shown in the notification title
    pub site_name: String,

    /// Log level (default: "info")
    pub log_level: String,

    /// Deployment environment name (default: "development")
    pub environment: String,
}

/// Credentials needed to reach one Telegram chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramSettings {
    pub api_url: String,
    pub bot_token: String,
    pub chat_id: String,
    pub request_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Secrets (all optional at startup, required for relaying):
    /// - `TELEGRAM_BOT_TOKEN`: bot token
    /// - `TELEGRAM_CHAT_ID`: destination chat id
    ///
    /// Optional environment variables:
    /// - `PORT`: listening port (default: 3000)
    /// - `TELEGRAM_API_URL`: Bot API base URL (default: https://api.telegram.org)
    /// - `REQUEST_TIMEOUT`: outbound timeout in seconds (default: 10)
    /// - `SITE_NAME`: notification title (default: "Kezi Fire Chilli")
    /// - `LOG_LEVEL`: logging level (default: "info")
    /// - `APP_ENV`: environment name (default: "development")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let port = Self::parse_env_u16("PORT", defaults.port)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;

        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let telegram_api_url =
            env::var("TELEGRAM_API_URL").unwrap_or(defaults.telegram_api_url);
        if !telegram_api_url.starts_with("http://") && !telegram_api_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                var: "TELEGRAM_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        Ok(Config {
            port,
            telegram_bot_token: Self::secret("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: Self::secret("TELEGRAM_CHAT_ID"),
            telegram_api_url,
            request_timeout,
            site_name: env::var("SITE_NAME").unwrap_or(defaults.site_name),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            environment: env::var("APP_ENV").unwrap_or(defaults.environment),
        })
    }

    /// Telegram settings, present only when both secrets are configured.
    pub fn telegram(&self) -> Option<TelegramSettings> {
        match (&self.telegram_bot_token, &self.telegram_chat_id) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramSettings {
                api_url: self.telegram_api_url.clone(),
                bot_token: bot_token.clone(),
                chat_id: chat_id.clone(),
                request_timeout: self.request_timeout,
            }),
            _ => None,
        }
    }

    /// Read a secret, treating blank values as absent.
    fn secret(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            telegram_bot_token: None,
            telegram_chat_id: None,
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            request_timeout: 10,
            site_name: "Kezi Fire Chilli".to_string(),
            log_level: "info".to_string(),
            environment: "development".to_string(),
        }
    }
}
