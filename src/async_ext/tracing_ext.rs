//! Tracing integration for async chains.
//!
//! # Feature Flag
//!
//! Requires both the `async` and `tracing` features.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::traits::trace_ext::log_failure;
use crate::types::Result;

/// Extension trait that logs failures of result futures.
///
/// # Example
///
/// ```rust,ignore
/// use railway_rail::prelude_async::*;
/// use tracing::info_span;
///
/// async fn restock(id: u32, qty: i32) -> Result<Product> {
///     let span = info_span!("restock", product_id = id);
///
///     service.update_stock(id, qty)
///         .trace_failure_in(span.clone())
///         .instrument(span)
///         .await
/// }
/// ```
pub trait FutureTraceExt<T>: Future<Output = Result<T>> + Sized {
    /// Logs a failure with the span current at construction time.
    fn trace_failure(self) -> TraceFailureFuture<Self> {
        TraceFailureFuture { inner: self, span: Span::current() }
    }

    /// Logs a failure naming `span`.
    fn trace_failure_in(self, span: Span) -> TraceFailureFuture<Self> {
        TraceFailureFuture { inner: self, span }
    }
}

impl<F, T> FutureTraceExt<T> for F where F: Future<Output = Result<T>> {}

pin_project! {
    /// Future wrapper that logs the failure track and passes the result through.
    ///
    /// Created by [`FutureTraceExt::trace_failure`] or [`FutureTraceExt::trace_failure_in`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TraceFailureFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, T> Future for TraceFailureFuture<F>
where
    F: Future<Output = Result<T>>,
{
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Err(error)) => {
                log_failure(&error, this.span);
                Poll::Ready(Err(error))
            },
            other => other,
        }
    }
}
