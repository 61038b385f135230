use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use tuesday_chat::{
    config::Config, routes, services::gemini::GeminiClient, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tuesday_chat=debug")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded configuration");
    if config.uses_default_secret() {
        tracing::warn!("SESSION_SECRET is not set; using the built-in placeholder secret");
    }

    let client = GeminiClient::from_config(&config);
    tracing::info!(model = client.model(), "Gemini client ready");

    let state = Arc::new(AppState::new(Arc::new(client)));

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "Tuesday chat running");
    axum::serve(listener, app).await?;
    Ok(())
}
