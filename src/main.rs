use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use storefront::config::{load_config, AppConfig};
use storefront::http::HttpServer;
use storefront::lifecycle::Shutdown;
use storefront::observability::logging;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Small demo web service", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init();
    tracing::info!("storefront v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_base_url = %config.upstream.base_url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
