//! newsdesk HTTP/JSON gateway binary.

use clap::Parser;
use newsdesk_gateway::{create_router, open_store, AppState, Args, GatewayConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_filter = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "newsdesk_gateway={log_filter},newsdesk_core={log_filter},tower_http=info"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from(args);
    let listen_addr = config.listen_addr();

    info!(
        listen = %listen_addr,
        data_dir = ?config.data_dir,
        invalid_pagination_status = ?config.invalid_pagination_status,
        "Starting newsdesk gateway"
    );

    let store = open_store(&config)?;
    if store.was_recovered() {
        info!("Recovered existing document store");
    }

    let state = AppState::new(store, config);
    let app = create_router(state);

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Gateway listening on {}", listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
