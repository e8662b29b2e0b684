mod app_state;
mod config;
mod domain;
mod router;
mod routes;

use anyhow::Context;
use tracing_subscriber::{fmt::time::LocalTime, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app_state::AppState, domain::AnalysisProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planner_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_timer(LocalTime::rfc_3339()))
        .init();

    let settings = config::read_config().context("Failed to read configuration")?;
    tracing::debug!(?settings, "Loaded configuration");

    let provider = AnalysisProvider::from_settings(&settings.model);
    let app = router::create(AppState::new(provider), &settings.application);

    let address = format!("{}:{}", settings.application.host, settings.application.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Listening on {}", local_addr);
    tracing::info!("Health check: http://{}/api/health", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
