//! Greeting endpoint.

use axum::{routing::get, Router};
use serde::Deserialize;

use crate::extract::ApiQuery;
use crate::AppState;

/// Greeting routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/hello", get(hello))
}

/// Query parameters for the greeting.
#[derive(Debug, Deserialize)]
pub struct HelloParams {
    pub name: Option<String>,
}

/// Plain-text greeting.
async fn hello(ApiQuery(params): ApiQuery<HelloParams>) -> String {
    newsdesk_core::greeting(params.name.as_deref())
}
