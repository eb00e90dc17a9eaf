//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use storefront::config::AppConfig;
use storefront::http::HttpServer;
use storefront::lifecycle::Shutdown;

/// Spawn the service on an ephemeral port.
///
/// Returns the base URL and the shutdown trigger keeping the server alive.
pub async fn spawn_app(config: AppConfig) -> (String, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (format!("http://{}", addr), shutdown)
}

/// Spawn the service with its upstream pointed at the given address.
#[allow(dead_code)]
pub async fn spawn_app_with_upstream(upstream: SocketAddr) -> (String, Shutdown) {
    let mut config = AppConfig::default();
    config.upstream.base_url = format!("http://{}", upstream);
    spawn_app(config).await
}

/// Start a mock upstream on an ephemeral port that answers every request
/// with 200 and the given body.
#[allow(dead_code)]
pub async fn start_mock_upstream(body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        // Drain the request head before answering.
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
