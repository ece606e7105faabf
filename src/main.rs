use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use post_relay::config::Config;
use post_relay::dispatch::GitHubDispatcher;
use post_relay::server::{build_router, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "post_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("invalid configuration");
    tracing::info!(repo = %config.repo, "Dispatching to content repository");

    let dispatcher = Arc::new(GitHubDispatcher::new(config.repo.clone()));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_router(AppState::new(config, dispatcher));

    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
