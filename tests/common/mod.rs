//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use metrics::Counter;
use tokio::net::TcpListener;

use sum_service::config::AppConfig;
use sum_service::endpoint::middleware::{Instrumenting, Logging, Tracing};
use sum_service::endpoint::SumEndpoint;
use sum_service::http::HttpServer;
use sum_service::lifecycle::Shutdown;
use sum_service::service::{InstrumentingService, LoggingService, StatelessService};

/// Boot a fully layered server on an ephemeral loopback port.
///
/// Returns the bound address, the shutdown handle, and the cell backing
/// the business counter so tests can assert on it.
pub async fn start_server() -> (SocketAddr, Shutdown, Arc<AtomicU64>) {
    let ints = Arc::new(AtomicU64::new(0));

    let service = LoggingService::new(InstrumentingService::new(
        Counter::from_arc(ints.clone()),
        StatelessService::new(),
    ));
    let endpoint = Logging::new(
        "sum",
        Instrumenting::new("sum", Tracing::new("sum", SumEndpoint::new(service))),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(AppConfig::default(), endpoint);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown, ints)
}
