//! Service error type and its wire mapping.
//!
//! # Design Decisions
//! - Exactly two failure shapes reach the wire: a 404 for an out-of-range
//!   user id, and a generic 500 for any upstream fetch problem
//! - The upstream cause is logged at error level but never returned to the
//!   client; the body stays a fixed JSON object

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors a request handler can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Item GET with an id above the static bound.
    #[error("User not found")]
    UserNotFound,

    /// Any transport or parse failure talking to the upstream API.
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::UserNotFound => {
                (StatusCode::NOT_FOUND, "User not found").into_response()
            }
            ApiError::Upstream(e) => {
                tracing::error!(error = %e, "Upstream request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Failed to fetch data"})),
                )
                    .into_response()
            }
        }
    }
}
