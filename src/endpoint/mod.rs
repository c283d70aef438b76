//! Transport-agnostic endpoint subsystem.
//!
//! # Data Flow
//! ```text
//! transport binding (decoded request)
//!     → middleware.rs  Logging → Instrumenting → Tracing
//!     → sum.rs         typed adapter over the service chain
//!     → transport binding (response or error)
//! ```
//!
//! # Design Decisions
//! - Request and response shapes are associated types, so a decorator is
//!   written once and reused for any operation while a mismatched type is
//!   a compile error rather than a runtime failure
//! - The error channel carries unexpected failures only; recognized domain
//!   errors ride inside the response (see [`Failer`]) so the transport can
//!   map them to their own wire status
//! - Chains are composed once at startup and shared read-only afterwards

use std::error::Error as StdError;
use std::future::Future;

use crate::service::ServiceError;

pub mod middleware;
pub mod sum;

pub use sum::{SumEndpoint, SumRequest, SumResponse};

/// Uniform failure channel for endpoint invocations.
pub type EndpointError = Box<dyn StdError + Send + Sync>;

/// A uniformly shaped request handler, the unit of generic middleware
/// composition between the transport and the service.
pub trait Endpoint: Send + Sync {
    type Request: Send + 'static;
    type Response: Send + 'static;

    fn call(
        &self,
        request: Self::Request,
    ) -> impl Future<Output = Result<Self::Response, EndpointError>> + Send;
}

/// Responses that may carry a domain error instead of a value.
///
/// The transport checks this before encoding a success body, keeping the
/// domain-failure wire mapping out of the endpoint's error channel.
pub trait Failer {
    fn failed(&self) -> Option<ServiceError>;
}
