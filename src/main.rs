use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use dentalconnect::config::AppConfig;
use dentalconnect::handlers;
use dentalconnect::services::directory;
use dentalconnect::services::relay::google_forms::GoogleFormsRelay;
use dentalconnect::state::AppState;

const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let relay = GoogleFormsRelay::new(config.relay_url.clone(), config.relay_timeout)
        .context("failed to build relay client")?;
    tracing::info!("relaying leads to {}", config.relay_url);

    let dentists = directory::load_dentists(config.dentists_file.as_deref())?;

    let state = Arc::new(AppState::new(config.clone(), Box::new(relay), dentists));

    let pruner = Arc::clone(&state);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            pruner.sessions.prune_idle();
        }
    });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
