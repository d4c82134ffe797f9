//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::registry::ActivityRegistry;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:activity_name", get(handlers::get_activity))
        .route("/activities/:activity_name/signup", post(handlers::signup))
        .route(
            "/activities/:activity_name/unregister",
            post(handlers::unregister),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Build the router and serve the front-end from `static_dir` under `/static`
pub fn create_router_with_static(state: AppState, static_dir: &Path) -> Router {
    create_router(state).nest_service("/static", ServeDir::new(static_dir))
}

/// Convenience helper for a router over an existing registry
pub fn create_registry_router(registry: Arc<ActivityRegistry>) -> Router {
    create_router(AppState::new(registry))
}
