use clap::Parser;
use product_service::config::{Cli, ServiceConfig};
use product_service::http::{self, AppState};
use product_service::lifecycle::{setup_tracing, ProductSystem};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    setup_tracing();

    let config = ServiceConfig::load(&cli)?;
    info!(?config, "Configuration loaded");

    let system = ProductSystem::from_config(&config);
    let state = AppState::new(
        system.product_client.clone(),
        config.normalization(),
        config.patch_validation,
    );
    let app = http::router(state, config.cors_origin_header()?);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
    info!("Shutdown signal received");
}
