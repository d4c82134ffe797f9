//! API handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::types::{Activity, ActivityMap};
use crate::{Error, Result};

/// Landing page of the browser front-end
pub const INDEX_PATH: &str = "/static/index.html";

/// Send browsers to the front-end
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// Health check with registry size
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        activities: state.registry.len().await,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub activities: usize,
}

/// List every activity with its participants
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(state.registry.list().await)
}

/// Fetch a single activity
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
) -> Result<Json<Activity>> {
    let activity = state.registry.get(&activity_name).await?;
    Ok(Json(activity))
}

/// Sign a student up for an activity
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>> {
    let email = required_email(query)?;

    state.registry.signup(&activity_name, &email).await?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    }))
}

/// Remove a student from an activity
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>> {
    let email = required_email(query)?;

    state.registry.unregister(&activity_name, &email).await?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity_name),
    }))
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// Absent `email` and malformed query strings are reported separately
fn required_email(
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> Result<String> {
    let Query(EmailQuery { email }) =
        query.map_err(|rejection| Error::InvalidEmailQuery(rejection.body_text()))?;
    email.ok_or(Error::MissingEmail)
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
