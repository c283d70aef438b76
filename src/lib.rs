//! Layered sum service.
//!
//! A demonstration of a layered request-handling pipeline: pure business
//! logic wrapped by observability decorators and exposed over HTTP through
//! a transport-agnostic endpoint.
//!
//! ```text
//! POST /sum
//!     → http (decode, timeout, request ID, trace)
//!     → endpoint chain: Logging → Instrumenting → Tracing → SumEndpoint
//!     → service chain:  Logging → Instrumenting → StatelessService
//!     → http (encode success, or map the error to a wire status)
//! ```
//!
//! Both chains are composed once at startup and shared read-only across
//! all concurrent requests.

// Core subsystems
pub mod endpoint;
pub mod http;
pub mod service;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
