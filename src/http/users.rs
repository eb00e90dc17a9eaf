//! Canned user resource handlers.
//!
//! # Responsibilities
//! - Acknowledge collection calls for every registered verb
//! - Acknowledge item calls, with the id bound check on GET
//!
//! # Design Decisions
//! - No backing store: every response is built from the request method (and
//!   id) alone, so all operations are trivially idempotent in effect
//! - The collection path answers PUT/PATCH/DELETE too, and only item GET
//!   checks the id bound; both quirks are part of the served contract
//! - A non-integer `{id}` segment gets the same 404 an unknown path would,
//!   not a 400

use axum::extract::Path;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::parse_path_id;

/// Highest user id the item GET treats as existing.
const MAX_USER_ID: u64 = 20;

/// Single-field acknowledgment payload.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: String,
}

/// `/users` — acknowledges the call for every registered verb.
pub async fn collection(method: Method) -> Json<Ack> {
    Json(Ack {
        message: format!("This is {} Call", method),
    })
}

/// `/users/{id}` — acknowledges the call; GET rejects ids above the bound.
pub async fn item(method: Method, Path(raw_id): Path<String>) -> Response {
    let Some(id) = parse_path_id(&raw_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if method == Method::GET && id > MAX_USER_ID {
        return ApiError::UserNotFound.into_response();
    }

    Json(Ack {
        message: format!("This is {} Call for {}", method, id),
    })
    .into_response()
}
