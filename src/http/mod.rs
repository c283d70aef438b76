//! HTTP transport binding.
//!
//! # Data Flow
//! ```text
//! POST /sum (wire bytes)
//!     → server.rs (decode body into the typed request)
//!     → endpoint chain (logging → instrumenting → tracing → adapter)
//!     → server.rs (encode response, or map an error to a wire status)
//! ```
//!
//! # Design Decisions
//! - Decode failures are transport errors: generic server-error status,
//!   never attributed to the domain
//! - A response carrying a domain error is encoded through the error
//!   envelope with its own client-error status
//! - The envelope shape `{"error": <message>}` is shared by every failure

pub mod response;
pub mod server;

pub use response::{ApiError, ErrorBody};
pub use server::HttpServer;
