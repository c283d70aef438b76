//! Instrumenting decorator for the sum service.

use std::future::Future;

use metrics::Counter;

use super::core::{ServiceError, SumService};

/// Accumulates returned values into a monotonic counter.
///
/// The counter handle is injected at construction so callers decide where
/// the metric lives (the Prometheus registry in production, a plain atomic
/// in tests). An overflowing call returns zero and therefore contributes
/// nothing; a negative sum cannot decrease a monotonic counter and also
/// contributes nothing.
pub struct InstrumentingService<S> {
    ints: Counter,
    inner: S,
}

impl<S> InstrumentingService<S> {
    pub fn new(ints: Counter, inner: S) -> Self {
        Self { ints, inner }
    }
}

impl<S: SumService> SumService for InstrumentingService<S> {
    fn sum(&self, x: i64, y: i64) -> impl Future<Output = Result<i64, ServiceError>> + Send {
        async move {
            let result = self.inner.sum(x, y).await;
            let v = result.unwrap_or(0);
            if v > 0 {
                self.ints.increment(v as u64);
            }
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::service::StatelessService;

    fn counted_service() -> (InstrumentingService<StatelessService>, Arc<AtomicU64>) {
        let cell = Arc::new(AtomicU64::new(0));
        let service = InstrumentingService::new(Counter::from_arc(cell.clone()), StatelessService::new());
        (service, cell)
    }

    #[tokio::test]
    async fn test_counter_accumulates_returned_values() {
        let (service, cell) = counted_service();
        assert_eq!(service.sum(5, 7).await, Ok(12));
        assert_eq!(service.sum(30, 0).await, Ok(30));
        assert_eq!(cell.load(Ordering::SeqCst), 42);
    }

    #[tokio::test]
    async fn test_overflow_contributes_zero() {
        let (service, cell) = counted_service();
        assert_eq!(service.sum(i64::MAX, 1).await, Err(ServiceError::IntOverflow));
        assert_eq!(cell.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_negative_sum_contributes_zero() {
        let (service, cell) = counted_service();
        assert_eq!(service.sum(-5, 2).await, Ok(-3));
        assert_eq!(cell.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_error_passes_through() {
        let (service, _) = counted_service();
        assert_eq!(service.sum(i64::MIN, -1).await, Err(ServiceError::IntOverflow));
    }
}
