//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! service and endpoint decorators produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counter, latency histogram)
//!     → request-scoped spans (endpoint tracing decorator)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Prometheus scrape listener
//! ```
//!
//! # Design Decisions
//! - Metric updates are atomic; no locks on the request path
//! - The business counter is handed to its decorator as a handle, so tests
//!   can back it with a plain atomic instead of the global registry

pub mod logging;
pub mod metrics;
