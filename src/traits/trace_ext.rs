//! Tracing integration for failures on the railway.
//!
//! Failures are reported as `tracing` events and then passed on untouched:
//! the [`Error`] reaching the end of the chain is still the first one raised.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! railway-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{Error, Result};

/// Extension trait that logs the failure track of a [`Result`](crate::Result).
///
/// # Example
///
/// ```rust,ignore
/// use railway_rail::prelude::*;
///
/// fn load(id: u32) -> Result<Product> {
///     repository.get_by_id(id).trace_failure()
/// }
/// ```
pub trait TraceFailureExt<T> {
    /// Emits a `WARN` event with the error code and message on failure,
    /// tagged with the current span's name, and returns `self` unchanged.
    fn trace_failure(self) -> Result<T>;

    /// Same as [`trace_failure`](TraceFailureExt::trace_failure), naming `span`
    /// instead of the current one.
    fn trace_failure_in(self, span: &Span) -> Result<T>;
}

impl<T> TraceFailureExt<T> for Result<T> {
    #[inline]
    fn trace_failure(self) -> Result<T> {
        self.trace_failure_in(&Span::current())
    }

    fn trace_failure_in(self, span: &Span) -> Result<T> {
        if let Err(error) = &self {
            log_failure(error, span);
        }
        self
    }
}

pub(crate) fn log_failure(error: &Error, span: &Span) {
    let span_name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    tracing::warn!(
        error.code = error.code(),
        error.message = error.message(),
        span = span_name,
        "railway failure"
    );
}
