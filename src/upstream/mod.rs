//! Upstream placeholder API subsystem.
//!
//! # Data Flow
//! ```text
//! proxy handler
//!     → client.rs (outbound GET, JSON parse)
//!     → serde_json::Value (opaque, forwarded verbatim)
//! ```
//!
//! # Design Decisions
//! - The upstream body is never inspected; whatever parses as JSON is
//!   forwarded unmodified
//! - The upstream status code is not consulted; only transport and parse
//!   failures count as errors
//! - No retries and no timeout beyond the HTTP client's defaults

pub mod client;

pub use client::UpstreamClient;
