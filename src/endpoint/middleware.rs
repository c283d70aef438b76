//! Generic endpoint decorators.
//!
//! Each wraps any [`Endpoint`] without knowing its request shape, so the
//! same middleware serves every operation the process exposes.

use std::future::Future;
use std::time::Instant;

use tracing::Instrument;

use super::{Endpoint, EndpointError};
use crate::observability::metrics;

/// Logs the outcome and elapsed time of every invocation.
///
/// Request contents are never logged here; this layer cannot know them.
pub struct Logging<E> {
    operation: &'static str,
    inner: E,
}

impl<E> Logging<E> {
    pub fn new(operation: &'static str, inner: E) -> Self {
        Self { operation, inner }
    }
}

impl<E: Endpoint> Endpoint for Logging<E> {
    type Request = E::Request;
    type Response = E::Response;

    fn call(
        &self,
        request: Self::Request,
    ) -> impl Future<Output = Result<Self::Response, EndpointError>> + Send {
        async move {
            let begin = Instant::now();
            let result = self.inner.call(request).await;
            match &result {
                Ok(_) => tracing::info!(
                    operation = self.operation,
                    took = ?begin.elapsed(),
                    "Endpoint call"
                ),
                Err(e) => tracing::info!(
                    operation = self.operation,
                    error = %e,
                    took = ?begin.elapsed(),
                    "Endpoint call"
                ),
            }
            result
        }
    }
}

/// Records a latency histogram observation per invocation, labeled with
/// the operation name and whether the call succeeded.
pub struct Instrumenting<E> {
    operation: &'static str,
    inner: E,
}

impl<E> Instrumenting<E> {
    pub fn new(operation: &'static str, inner: E) -> Self {
        Self { operation, inner }
    }
}

impl<E: Endpoint> Endpoint for Instrumenting<E> {
    type Request = E::Request;
    type Response = E::Response;

    fn call(
        &self,
        request: Self::Request,
    ) -> impl Future<Output = Result<Self::Response, EndpointError>> + Send {
        async move {
            let begin = Instant::now();
            let result = self.inner.call(request).await;
            metrics::record_request_duration(self.operation, result.is_ok(), begin);
            result
        }
    }
}

/// Scopes a trace span around every invocation.
///
/// The inner future is instrumented with the span, so it closes on every
/// exit path, including cancellation mid-flight.
pub struct Tracing<E> {
    operation: &'static str,
    inner: E,
}

impl<E> Tracing<E> {
    pub fn new(operation: &'static str, inner: E) -> Self {
        Self { operation, inner }
    }
}

impl<E: Endpoint> Endpoint for Tracing<E> {
    type Request = E::Request;
    type Response = E::Response;

    fn call(
        &self,
        request: Self::Request,
    ) -> impl Future<Output = Result<Self::Response, EndpointError>> + Send {
        let span = tracing::info_span!("endpoint", operation = self.operation);
        self.inner.call(request).instrument(span)
    }
}
