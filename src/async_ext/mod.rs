//! Async extensions for railway pipelines.
//!
//! This module mirrors the synchronous combinators across `.await` points,
//! keeping the same short-circuit guarantee: once a stage fails, no later
//! stage builds or awaits anything.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! railway-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use railway_rail::prelude_async::*;
//!
//! async fn rename(id: u32, name: String) -> Result<Product> {
//!     repository.get_by_id(id)
//!         .bind_async(move |product| product.rename(name))
//!         .bind_async(|product| repository.update(product))
//!         .await
//! }
//! ```

mod bind;
mod ensure;
mod future_ext;
mod map;
mod tap;
#[cfg(feature = "tracing")]
mod tracing_ext;

pub use bind::BindAsync;
pub use ensure::EnsureAsync;
pub use future_ext::{lift, FutureRailExt};
pub use map::MapAsync;
pub use tap::TapAsync;
#[cfg(feature = "tracing")]
pub use tracing_ext::{FutureTraceExt, TraceFailureFuture};
