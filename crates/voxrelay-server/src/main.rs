//! Voxrelay Server - HTTP relay for upstream voice generation

use std::path::Path;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod error;
mod state;

use state::AppState;
use voxrelay_core::{Config, RelayService};

const CONFIG_PATH: &str = "voxrelay.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "voxrelay_server=debug,voxrelay_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Voxrelay Server");

    // Load configuration
    let config = Config::load_or_default(Path::new(CONFIG_PATH))?;
    info!(
        upstream = %config.relay.upstream_url,
        delivery = ?config.relay.delivery,
        "Relay configured"
    );

    // Create the relay service
    let relay = RelayService::new(&config.relay)?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(relay, config);

    // Build router
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
