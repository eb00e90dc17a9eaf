//! HTTP surface subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route registration, middleware)
//!     → users.rs / proxy.rs / pages.rs (handlers)
//!     → error.rs (failure → wire mapping)
//!     → Send to client
//! ```

pub mod error;
pub mod pages;
pub mod proxy;
pub mod server;
pub mod users;

pub use error::ApiError;
pub use server::{AppState, HttpServer};

/// Parse an `{id}` path segment as the router would: digits only.
///
/// Returns `None` for anything else, which handlers surface as the same 404
/// an unknown path produces.
pub(crate) fn parse_path_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
