//! Read-only passthrough of the upstream user API.
//!
//! # Design Decisions
//! - The upstream body is forwarded verbatim; no schema is enforced
//! - Failure detail never reaches the client (see `ApiError::Upstream`)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::parse_path_id;
use crate::http::server::AppState;

/// `/json_users` — forwards the upstream user list.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = state.upstream.fetch_users().await?;
    Ok(Json(users))
}

/// `/json_users/{id}` — forwards a single upstream user record.
pub async fn single_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_path_id(&raw_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.upstream.fetch_user(id).await {
        Ok(user) => Json(user).into_response(),
        Err(e) => ApiError::Upstream(e).into_response(),
    }
}
