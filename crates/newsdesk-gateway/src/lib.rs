//! newsdesk HTTP/JSON gateway.
//!
//! Serves the news catalog and the greeting endpoint over REST, backed by the
//! embedded document store from `newsdesk-core`.

pub mod config;
pub mod demo;
pub mod error;
pub mod extract;
pub mod routes;

pub use config::{Args, GatewayConfig, InvalidPaginationStatus};
pub use error::AppError;

use std::sync::Arc;

use axum::{http::StatusCode, Router};
use newsdesk_core::{DocumentStore, NewsService};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// News catalog service.
    pub news: NewsService,
    /// Backing store, for store-level diagnostics.
    pub store: Arc<DocumentStore>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new application state reading from `store`.
    pub fn new(store: Arc<DocumentStore>, config: GatewayConfig) -> Self {
        Self {
            news: NewsService::new(store.clone()),
            store,
            config,
        }
    }
}

/// Open the document store and load any configured seed data.
pub fn open_store(config: &GatewayConfig) -> Result<Arc<DocumentStore>, newsdesk_core::Error> {
    let store = DocumentStore::open(config.storage_config())?;

    if let Some(path) = &config.seed_file {
        let inserted = demo::load_seed_file(&store, path)?;
        info!(path = %path.display(), inserted, "Loaded seed documents");
    }

    if config.demo {
        let inserted = demo::insert_demo_data(&store)?;
        info!(inserted, "Inserted demo catalog");
    }

    Ok(Arc::new(store))
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout,
        ))
        .layer(cors);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::hello::routes())
        .merge(routes::news::routes())
        .layer(middleware)
        .with_state(state)
}
