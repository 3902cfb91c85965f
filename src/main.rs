use anyhow::Context;
use tracing_subscriber::EnvFilter;

use rec_me::{
    api::{create_router, AppState},
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rec_me=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    if config.proxy_config().api_key().is_none() {
        tracing::warn!("TASTEDIVE_API_KEY is not set; recommendation requests will fail");
    }

    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(port = config.port, "Proxy server running on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
