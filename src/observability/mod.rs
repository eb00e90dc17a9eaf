//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; per-request spans come from
//!   `tower_http::trace::TraceLayer`
//! - Log filter configurable through `RUST_LOG`, with a development default
//! - No metrics endpoint; logging is the only telemetry surface

pub mod logging;
