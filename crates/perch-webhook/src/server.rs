//! Webhook server
//!
//! Thin axum wrapper around the dispatch engine: builds the router, binds
//! the configured address, and serves. The engine and auth settings are
//! injected through [`AppState`] at construction; nothing here closes
//! over the bot.

use axum::{routing::post, Router};
use perch_core::{config::AuthConfig, BotConfig, DispatchEngine, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::info;

use crate::routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DispatchEngine>,
    pub auth: Arc<AuthConfig>,
}

/// Build the webhook router around an explicit engine reference.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(routes::receive_event))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(state)
}

/// Webhook server: owns the engine for the life of the process.
pub struct WebhookServer {
    config: BotConfig,
    engine: DispatchEngine,
}

impl WebhookServer {
    pub fn new(config: BotConfig, engine: DispatchEngine) -> Self {
        Self { config, engine }
    }

    /// Bind and serve until the process exits. Consumes the server; the
    /// registry is immutable from here on.
    pub async fn run(self) -> Result<()> {
        let state = AppState {
            engine: Arc::new(self.engine),
            auth: Arc::new(self.config.auth.clone()),
        };

        let app = create_router(state);
        let addr = format!(
            "{}:{}",
            self.config.server.bind_address, self.config.server.port
        );
        let listener = TcpListener::bind(&addr).await?;

        info!("Perch webhook server listening on http://{}", addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}
