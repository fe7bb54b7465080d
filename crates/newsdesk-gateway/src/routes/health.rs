//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::blocking;
use crate::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Gateway version.
    pub version: String,
    /// Number of stored documents, absent if the store could not be read.
    pub documents: Option<u64>,
    /// Bytes the store occupies on disk, absent if unknown.
    pub disk_bytes: Option<u64>,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let news = state.news.clone();
    let store = state.store.clone();
    let (documents, disk_bytes) = blocking(move || {
        Ok((news.count().ok(), store.size_on_disk().ok()))
    })
    .await
    .unwrap_or((None, None));

    Json(HealthResponse {
        status: if documents.is_some() { "healthy" } else { "degraded" }.to_string(),
        service: "newsdesk-gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        documents,
        disk_bytes,
    })
}
