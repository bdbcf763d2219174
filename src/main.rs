//! Contact Relay - Main entry point
//!
//! Serves the contact form API and relays submissions to Telegram.

use anyhow::Result;
use contact_relay::server::{self, AppState};
use contact_relay::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first; its log level seeds the default filter
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");
    info!(
        "Telegram API: {}, request timeout: {}s",
        config.telegram_api_url, config.request_timeout
    );

    let state = AppState::from_config(&config);
    server::run_server(&config, state).await?;

    info!("Contact relay shutdown complete");
    Ok(())
}
