//! Webhook transport: axum server accepting Telegram updates on `POST /webhook`.
//!
//! Each update is processed in its own task; the endpoint answers `{"ok": true}` immediately.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use teloxide::{prelude::*, types::Update};
use tracing::{debug, info};

use crate::runner::WishBot;

/// Router with `POST /webhook` and `GET /health`.
pub fn webhook_router(app: Arc<WishBot>) -> Router {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .route("/health", get(health))
        .with_state(app)
}

async fn handle_webhook(State(app): State<Arc<WishBot>>, Json(update): Json<Update>) -> Json<Value> {
    debug!(update_id = ?update.id, "Received webhook update");
    tokio::spawn(async move {
        app.handle_update(&update).await;
    });
    Json(json!({ "ok": true }))
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Registers `public_url` with Telegram when given, then serves the router on `addr` until Ctrl-C.
pub async fn run_webhook(
    bot: teloxide::Bot,
    app: Arc<WishBot>,
    addr: SocketAddr,
    public_url: Option<reqwest::Url>,
) -> Result<()> {
    if let Some(url) = public_url {
        bot.set_webhook(url.clone()).await?;
        info!(url = %url, "Webhook registered");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "Webhook server listening");

    axum::serve(listener, webhook_router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Webhook server stopped");
    Ok(())
}
