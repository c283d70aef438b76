//! Logging decorator for the sum service.

use std::future::Future;
use std::time::Instant;

use super::core::{ServiceError, SumService};

/// Records every invocation with its inputs, outcome, and elapsed time.
///
/// A pure observer: the wrapped result and error pass through untouched.
#[derive(Debug, Clone)]
pub struct LoggingService<S> {
    inner: S,
}

impl<S> LoggingService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: SumService> SumService for LoggingService<S> {
    fn sum(&self, x: i64, y: i64) -> impl Future<Output = Result<i64, ServiceError>> + Send {
        async move {
            let begin = Instant::now();
            let result = self.inner.sum(x, y).await;
            match result {
                Ok(v) => tracing::info!(
                    method = "sum",
                    x,
                    y,
                    result = v,
                    took = ?begin.elapsed(),
                    "Service call"
                ),
                Err(e) => tracing::info!(
                    method = "sum",
                    x,
                    y,
                    error = %e,
                    took = ?begin.elapsed(),
                    "Service call"
                ),
            }
            result
        }
    }
}
