use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gcal_gateway::config::GoogleConfig;
use gcal_gateway::state::AppState;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading credentials; a missing file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = GoogleConfig::from_env()?;
    let state = AppState::new(config);

    let app = gcal_gateway::app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT));
    info!("gcal-gateway listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
