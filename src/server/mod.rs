//! HTTP server shell: shared state and router construction.
//!
//! # Endpoints
//!
//! - `POST /api/posts` - format a new post and trigger a `create-post` dispatch
//! - `PUT /api/posts/{*filename}` - trigger an `update-post` dispatch
//! - `DELETE /api/posts/{*filename}` - trigger a `delete-post` dispatch
//! - `GET /health` - liveness probe
//!
//! The webhook signature guard in `crate::webhooks` is not layered onto any
//! of these routes; it is available for a webhook-receiving endpoint.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod health;
pub mod posts;

pub use health::health_handler;

use crate::config::Config;
use crate::dispatch::Dispatcher;

/// Shared application state, passed to handlers via axum's `State` extractor.
///
/// Cheap to clone; the configuration and dispatcher live behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Bearer token for outbound dispatches, if configured.
    github_token: Option<String>,

    /// Shared secret for webhook signature verification, if configured.
    webhook_secret: Option<Vec<u8>>,

    /// Executes dispatch events. Injected so tests can record instead of
    /// calling out.
    dispatcher: Arc<dyn Dispatcher>,
}

impl AppState {
    /// Creates the application state from startup configuration and a
    /// dispatcher.
    pub fn new(config: Config, dispatcher: Arc<dyn Dispatcher>) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                github_token: config.github_token,
                webhook_secret: config.webhook_secret,
                dispatcher,
            }),
        }
    }

    /// Returns the configured bearer token, if any.
    pub fn github_token(&self) -> Option<&str> {
        self.inner.github_token.as_deref()
    }

    /// Returns the configured webhook secret, if any.
    pub fn webhook_secret(&self) -> Option<&[u8]> {
        self.inner.webhook_secret.as_deref()
    }

    /// Returns the dispatch executor.
    pub fn dispatcher(&self) -> &Arc<dyn Dispatcher> {
        &self.inner.dispatcher
    }
}

/// Builds the axum router with all endpoints.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/posts", post(posts::create_post))
        .route(
            "/api/posts/{*filename}",
            put(posts::update_post).delete(posts::delete_post),
        )
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
