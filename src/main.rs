use anyhow::Context;
use tracing_subscriber::EnvFilter;

use dresscode_api::api::{create_router, AppState};
use dresscode_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dresscode_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::load(&config).await?;
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
