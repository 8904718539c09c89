use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use super::{
    AppState,
    error::{ApiError, ApiResult},
};
use crate::{db::Watchlist, error::StorageError, models::Symbol};

#[derive(Deserialize)]
pub struct AddSymbolRequest {
    #[serde(default)]
    symbol: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Runs a watchlist operation off the async workers, since stores do blocking file I/O.
async fn with_watchlist<T, F>(state: &AppState, op: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Watchlist) -> Result<T, StorageError> + Send + 'static,
{
    let watchlist = state.watchlist.clone();
    let result = tokio::task::spawn_blocking(move || op(watchlist.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(format!("Watchlist task failed: {}", e)))?;

    Ok(result?)
}

pub async fn get_watchlist(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Symbol>>> {
    let symbols = with_watchlist(&state, |watchlist| watchlist.list()).await?;
    Ok(Json(symbols))
}

pub async fn add_symbol(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AddSymbolRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(body) = body?;
    let symbol = Symbol::parse(&body.symbol)?;
    let target = symbol.clone();
    let outcome = with_watchlist(&state, move |watchlist| watchlist.add(&target)).await?;
    info!(%symbol, %outcome, "watchlist add");

    Ok(Json(MessageResponse {
        message: format!("{} added.", symbol),
    }))
}

pub async fn remove_symbol(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let symbol = Symbol::parse(&symbol)?;
    let target = symbol.clone();
    let outcome = with_watchlist(&state, move |watchlist| watchlist.remove(&target)).await?;
    info!(%symbol, %outcome, "watchlist remove");

    Ok(Json(MessageResponse {
        message: format!("{} removed.", symbol),
    }))
}

/// Latest quote for a symbol, or `{}` when the provider has none.
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Value>> {
    let symbol = Symbol::parse(&symbol)?;

    match state.provider.fetch_quote(&symbol).await? {
        Some(quote) => serde_json::to_value(&quote)
            .map(Json)
            .map_err(|e| ApiError::Internal(format!("Failed to serialize quote: {}", e))),
        None => Ok(Json(json!({}))),
    }
}
