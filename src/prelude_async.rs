//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async combinators.
//!
//! # Usage
//!
//! ```ignore
//! use railway_rail::prelude_async::*;
//!
//! async fn create_product(name: String, price: f64) -> Result<Product> {
//!     lift(Product::create(&name, price, 0))
//!         .bind_async(|product| repository.add(product))
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! - Everything in [`prelude`](crate::prelude)
//! - **Traits**: [`FutureRailExt`](crate::async_ext::FutureRailExt)
//! - **Functions**: [`lift`](crate::async_ext::lift)
//! - With `tracing`: [`FutureTraceExt`](crate::async_ext::FutureTraceExt)

pub use crate::prelude::*;

pub use crate::async_ext::{lift, FutureRailExt};

#[cfg(feature = "tracing")]
pub use crate::async_ext::FutureTraceExt;
