//! Sum service binary: composition root.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use sum_service::config::AppConfig;
use sum_service::endpoint::middleware::{Instrumenting, Logging, Tracing};
use sum_service::endpoint::SumEndpoint;
use sum_service::http::HttpServer;
use sum_service::lifecycle::{signals, Shutdown};
use sum_service::observability::{logging, metrics};
use sum_service::service::{InstrumentingService, LoggingService, StatelessService};

#[derive(Parser)]
#[command(name = "sum-service")]
#[command(about = "Layered sum service over HTTP", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => sum_service::config::load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init_logging(&config.observability.log_filter);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Business domain: logging outermost, then instrumenting, then the core.
    let service = LoggingService::new(InstrumentingService::new(
        metrics::integers_summed(),
        StatelessService::new(),
    ));

    // Endpoint domain: logging → instrumenting → tracing → adapter.
    let endpoint = Logging::new(
        "sum",
        Instrumenting::new("sum", Tracing::new("sum", SumEndpoint::new(service))),
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        tracing::info!("Shutdown signal received");
        shutdown.trigger();
    });

    let server = HttpServer::new(config, endpoint);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
