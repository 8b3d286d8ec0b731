//! Tests for tracing integration on futures.

use railway_rail::prelude_async::*;

use crate::traits::trace_ext::WarnRecorder;

#[test]
fn future_trace_failure_logs_and_passes_error_through() {
    let recorder = WarnRecorder::default();
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

    let result = tracing::subscriber::with_default(recorder.clone(), || {
        runtime.block_on(async {
            lift(failure::<u8>(Error::new("PRODUCT_NOT_FOUND", "Product with ID 7 was not found.")))
                .map_async(|x| x + 1)
                .trace_failure()
                .await
        })
    });

    assert_eq!(result, Err(Error::new("PRODUCT_NOT_FOUND", "Product with ID 7 was not found.")));

    let warnings = recorder.recorded();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["error.code"], "PRODUCT_NOT_FOUND");
    assert_eq!(warnings[0]["error.message"], "Product with ID 7 was not found.");
}

#[tokio::test]
async fn future_trace_failure_success_passes_through() {
    let result = lift(success(42)).trace_failure().await;
    assert_eq!(result, Ok(42));
}

#[tokio::test]
async fn future_trace_failure_in_named_span() {
    let span = tracing::info_span!("restock");
    let result = lift(failure::<()>(Error::new("INSUFFICIENT_STOCK", "Not enough stock available.")))
        .trace_failure_in(span)
        .await;

    assert_eq!(result.unwrap_err().code(), "INSUFFICIENT_STOCK");
}
