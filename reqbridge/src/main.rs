use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;

use reqbridge::{AppConfig, AppState, build_app, build_gateway, init_tracing, shutdown_signal};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env()?;
    init_tracing(&config)?;

    tracing::info!(address = %config.bind_address(), "starting reqbridge");

    let gateway = build_gateway(&config)?;
    let app = build_app(AppState::new(Arc::new(gateway)));

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("reqbridge stopped");
    Ok(())
}
