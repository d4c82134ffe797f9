//! Mergington Activities server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mergington_activities::api::{create_router, create_router_with_static, AppState};
use mergington_activities::config::{AppConfig, LogFormat};
use mergington_activities::registry::ActivityRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let registry = Arc::new(ActivityRegistry::seeded());
    tracing::info!(
        activities = registry.len().await,
        "Activity registry seeded"
    );

    let router = build_router(&config, AppState::new(registry));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn build_router(config: &AppConfig, state: AppState) -> axum::Router {
    match config.static_dir() {
        Some(dir) if dir.is_dir() => {
            tracing::info!(path = %dir.display(), "Serving front-end under /static");
            create_router_with_static(state, &dir)
        }
        Some(dir) => {
            tracing::warn!(
                path = %dir.display(),
                "Static directory not found; front-end will not be served"
            );
            create_router(state)
        }
        None => {
            tracing::info!("Static file serving disabled");
            create_router(state)
        }
    }
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("mergington_activities=info,tower_http=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
