pub mod error;
pub mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    api::{AlphaVantageClient, QuoteProvider},
    config::Config,
    db::{FileWatchlistStore, Watchlist},
};

pub struct AppState {
    pub watchlist: Arc<Watchlist>,
    pub provider: Arc<dyn QuoteProvider>,
}

pub fn build_state(config: &Config) -> Result<Arc<AppState>> {
    let provider =
        AlphaVantageClient::new(config).context("Failed to set up quote client")?;

    Ok(Arc::new(AppState {
        watchlist: Arc::new(Watchlist::new(FileWatchlistStore::new(
            config.watchlist_path(),
        ))),
        provider: Arc::new(provider),
    }))
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/watchlist",
            get(handlers::get_watchlist).post(handlers::add_symbol),
        )
        .route("/api/watchlist/{symbol}", delete(handlers::remove_symbol))
        .route("/api/quote/{symbol}", get(handlers::get_quote))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: &Config) -> Result<()> {
    if !config.has_api_key() {
        tracing::warn!("no provider credential configured, quote requests will fail");
    }

    let state = build_state(config)?;
    let router = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr()))?;
    info!("Listening on {}", config.listen_addr());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::{
            select,
            signal::unix::{SignalKind, signal},
        };
        let (Ok(mut sigterm), Ok(mut sigint)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) else {
            let _ = tokio::signal::ctrl_c().await;
            return;
        };
        select! {
            _ = sigterm.recv() => {},
            _ = sigint.recv()  => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
