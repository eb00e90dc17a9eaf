//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing)
//! - Serve on a bound listener with graceful shutdown

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::{pages, proxy, users};
use crate::lifecycle::signals;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// HTTP server for the storefront service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState {
            upstream: UpstreamClient::new(config.upstream.base_url.as_str()),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(state: AppState) -> Router {
        let portfolio = Router::new()
            .route("/", get(pages::home))
            .route("/about/", get(pages::about))
            .route("/contactxyz/", get(pages::contact))
            .route("/project/", get(pages::projects))
            .route("/contact-submission/", post(pages::contact_submission));

        let weather = Router::new()
            .route("/dhaka/", get(pages::dhaka))
            .route("/rajshahi/", get(pages::rajshahi))
            .route("/intro/", get(pages::intro));

        Router::new()
            .route(
                "/users",
                get(users::collection)
                    .post(users::collection)
                    .put(users::collection)
                    .patch(users::collection)
                    .delete(users::collection),
            )
            // POST is deliberately not registered on the item path.
            .route(
                "/users/{id}",
                get(users::item)
                    .put(users::item)
                    .patch(users::item)
                    .delete(users::item),
            )
            .route("/json_users", get(proxy::list_users))
            .route("/json_users/{id}", get(proxy::single_user))
            .route("/check/{n}", get(pages::odd_even))
            .route("/record/{name}/{age}", get(pages::record))
            .route("/show", post(pages::show))
            // axum 0.8 mounts a nested `/` route at the prefix without a
            // trailing slash; the spec serves the portfolio home at
            // `/portfolio/`, so mount it explicitly alongside the nest.
            .route("/portfolio/", get(pages::home))
            .nest("/portfolio", portfolio)
            .nest("/weather", weather)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server on the given listener until a shutdown signal arrives,
    /// either from the OS or from the provided broadcast channel.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Programmatic shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
