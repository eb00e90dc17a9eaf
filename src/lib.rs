//! Storefront demo web service.
//!
//! A small, stateless HTTP service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                  STOREFRONT                  │
//!                      │                                              │
//!   Client Request     │  ┌─────────┐     ┌────────────────────────┐ │
//!   ───────────────────┼─▶│  http   │────▶│        handlers        │ │
//!                      │  │ server  │     │ users / proxy / pages  │ │
//!                      │  └─────────┘     └─────┬──────────┬───────┘ │
//!                      │                        │          │         │
//!                      │                        ▼          ▼         │
//!                      │                 ┌──────────┐ ┌─────────┐    │
//!                      │                 │ upstream │ │ render  │    │
//!                      │                 │  client  │ │         │    │
//!                      │                 └────┬─────┘ └─────────┘    │
//!                      │                      │                      │
//!                      │  ┌────────────────────────────────────────┐ │
//!                      │  │         Cross-Cutting Concerns         │ │
//!                      │  │  ┌────────┐ ┌──────────┐ ┌───────────┐ │ │
//!                      │  │  │ config │ │ observa- │ │ lifecycle │ │ │
//!                      │  │  │        │ │ bility   │ │           │ │ │
//!                      │  │  └────────┘ └──────────┘ └───────────┘ │ │
//!                      │  └────────────────────────────────────────┘ │
//!                      └──────────────────────┬───────────────────────┘
//!                                             │ GET /users[/{id}]
//!                                             ▼
//!                                   placeholder user API
//! ```
//!
//! # Route groups
//! - `/users`, `/users/{id}` — canned acknowledgment resource
//! - `/json_users`, `/json_users/{id}` — read-only upstream passthrough
//! - `/portfolio/*`, `/weather/*`, `/check`, `/record`, `/show` — demo pages

// Core subsystems
pub mod config;
pub mod http;
pub mod render;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
