//! News catalog endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use newsdesk_core::{NewsResponse, PagedResponse};
use serde::Deserialize;

use super::blocking;
use crate::error::AppError;
use crate::extract::ApiQuery;
use crate::AppState;

/// News routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(list_news))
        .route("/news/:id", get(get_news))
}

/// Query parameters for listing news.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Page number (0-indexed).
    #[serde(default)]
    pub page: i64,
    /// Page size.
    #[serde(default = "default_page_size")]
    pub size: i64,
}

fn default_page_size() -> i64 {
    10
}

/// Handle a paged listing.
async fn list_news(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<PagedResponse<NewsResponse>>, AppError> {
    let status = state.config.invalid_pagination_status.status_code();
    let news = state.news.clone();
    let page = blocking(move || {
        news.page(params.page, params.size)
            .map_err(|e| AppError::from(e).with_pagination_status(status))
    })
    .await?;

    Ok(Json(page))
}

/// Handle a single-entry lookup.
async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NewsResponse>, AppError> {
    let news = state.news.clone();
    let lookup = id.clone();
    blocking(move || Ok(news.get_by_id(Some(&lookup))?))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("news {id} not found")))
}
