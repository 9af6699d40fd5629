use portfolio_advisor_bot::{api::start_server, config::HostConfig, dispatch::create_default_dispatcher};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env + host settings
    let config = HostConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("🚀 Portfolio Advisor Bot - API Server");
    info!("📍 Port: {}", config.port);

    let dispatcher = Arc::new(create_default_dispatcher());
    info!(intents = ?dispatcher.list(), "✅ Dispatcher initialized");

    start_server(dispatcher, &config).await?;

    Ok(())
}
