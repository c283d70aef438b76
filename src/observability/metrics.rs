//! Metrics collection and exposition.
//!
//! # Metrics
//! - `integers_summed_total` (counter): cumulative sum of values returned
//!   by the sum operation
//! - `request_duration_seconds` (histogram): endpoint latency by
//!   operation and success

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram, Counter, Unit};
use metrics_exporter_prometheus::PrometheusBuilder;

pub const INTEGERS_SUMMED: &str = "integers_summed_total";
pub const REQUEST_DURATION: &str = "request_duration_seconds";

/// Install the Prometheus exporter with a scrape listener on `addr` and
/// register metric descriptions.
pub fn init_metrics(addr: SocketAddr) {
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::error!(error = %e, "Failed to install Prometheus exporter");
        return;
    }
    describe_metrics();
    tracing::info!(address = %addr, "Metrics exporter listening");
}

fn describe_metrics() {
    describe_counter!(
        INTEGERS_SUMMED,
        Unit::Count,
        "Cumulative sum of values returned by the sum operation."
    );
    describe_histogram!(
        REQUEST_DURATION,
        Unit::Seconds,
        "Endpoint request duration by operation and success."
    );
}

/// Handle to the business counter, for injection into the instrumenting
/// service decorator.
pub fn integers_summed() -> Counter {
    counter!(INTEGERS_SUMMED)
}

/// Record one endpoint invocation in the latency histogram.
pub fn record_request_duration(operation: &'static str, success: bool, begin: Instant) {
    histogram!(
        REQUEST_DURATION,
        "operation" => operation,
        "success" => if success { "true" } else { "false" },
    )
    .record(begin.elapsed().as_secs_f64());
}
