//! HTTP server for the contact relay.
//!
//! Exposes `POST /api/contact` and `GET /api/health` over axum.

pub mod handlers;
pub mod response;

use crate::config::Config;
use crate::relay::{Relay, TelegramClient, TelegramRelay};
use crate::services::{SubmissionService, SubmissionServiceImpl};
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn SubmissionService>,
}

impl AppState {
    pub fn new(service: Arc<dyn SubmissionService>) -> Self {
        Self { service }
    }

    /// Wire the production service from configuration.
    ///
    /// Missing Telegram secrets leave the relay unset; the contact endpoint
    /// then answers with a configuration error instead of failing startup.
    pub fn from_config(config: &Config) -> Self {
        let relay = config.telegram().map(|settings| {
            Arc::new(TelegramRelay::new(TelegramClient::new(&settings))) as Arc<dyn Relay>
        });

        if relay.is_none() {
            tracing::warn!("Telegram credentials not configured!");
        }

        let service = SubmissionServiceImpl::new(relay, config.site_name.clone());
        Self::new(Arc::new(service))
    }
}

/// Build the router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/health", get(handlers::health))
        .layer(CatchPanicLayer::custom(response::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the HTTP server until Ctrl-C.
pub async fn run_server(config: &Config, state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Contact relay running on port {}", config.port);
    tracing::info!("Environment: {}", config.environment);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Keep serving; without a signal handler there is nothing to wait on
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
