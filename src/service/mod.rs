//! Business-logic subsystem.
//!
//! # Data Flow
//! ```text
//! endpoint adapter
//!     → logging.rs (observe inputs, outcome, elapsed time)
//!     → instrumenting.rs (accumulate returned values into a counter)
//!     → core.rs (pure sum with overflow detection)
//! ```
//!
//! # Design Decisions
//! - The capability is a trait; the core and every decorator implement it
//! - Decorators own their inner service: a plain forwarding chain, built
//!   once at startup and never reconfigured per request
//! - Decorators observe; they never alter a result or an error

pub mod core;
pub mod instrumenting;
pub mod logging;

pub use self::core::{ServiceError, StatelessService, SumService};
pub use instrumenting::InstrumentingService;
pub use logging::LoggingService;
