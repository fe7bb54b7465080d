//! Gateway configuration.

use std::path::PathBuf;
use std::time::Duration;

use axum::http::StatusCode;
use clap::{Parser, ValueEnum};
use newsdesk_core::StorageConfig;

/// HTTP status used when `/news` receives invalid pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InvalidPaginationStatus {
    /// 500, matching the historical behavior of the service.
    #[default]
    ServerError,
    /// 400.
    BadRequest,
}

impl InvalidPaginationStatus {
    /// The HTTP status code to respond with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            InvalidPaginationStatus::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
            InvalidPaginationStatus::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

/// newsdesk HTTP gateway command line arguments.
#[derive(Debug, Parser)]
#[command(name = "newsdesk-gateway")]
#[command(about = "HTTP/JSON gateway for the newsdesk catalog")]
#[command(version)]
pub struct Args {
    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Directory for the document store (default: temporary store).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Store page cache size in megabytes.
    #[arg(long, default_value_t = 64)]
    pub cache_capacity_mb: u64,

    /// JSON file with an array of documents to insert at startup.
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Insert the built-in demo catalog at startup.
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Per-request timeout (ms).
    #[arg(long, default_value_t = 30_000)]
    pub request_timeout_ms: u64,

    /// Status returned for invalid pagination parameters.
    #[arg(long, value_enum, default_value_t = InvalidPaginationStatus::ServerError)]
    pub invalid_pagination_status: InvalidPaginationStatus,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Document store directory. `None` uses a temporary store.
    pub data_dir: Option<PathBuf>,
    /// Store page cache size in bytes.
    pub cache_capacity: u64,
    /// Seed file loaded at startup.
    pub seed_file: Option<PathBuf>,
    /// Whether to insert the demo catalog at startup.
    pub demo: bool,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Status returned for invalid pagination parameters.
    pub invalid_pagination_status: InvalidPaginationStatus,
}

impl From<Args> for GatewayConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            data_dir: args.data_dir,
            cache_capacity: args.cache_capacity_mb * 1024 * 1024,
            seed_file: args.seed,
            demo: args.demo,
            request_timeout: Duration::from_millis(args.request_timeout_ms),
            invalid_pagination_status: args.invalid_pagination_status,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_dir: None,
            cache_capacity: 64 * 1024 * 1024,
            seed_file: None,
            demo: false,
            request_timeout: Duration::from_secs(30),
            invalid_pagination_status: InvalidPaginationStatus::default(),
        }
    }
}

impl GatewayConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Storage configuration for the document store.
    pub fn storage_config(&self) -> StorageConfig {
        let config = match &self.data_dir {
            Some(dir) => StorageConfig::new(dir),
            None => StorageConfig::temporary(),
        };
        config.with_cache_capacity(self.cache_capacity)
    }
}
