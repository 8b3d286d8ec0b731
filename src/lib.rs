//! Railway-oriented `Result` combinators.
//!
//! A pipeline is a sequence of fallible steps. Each step sees only the
//! success track; the first [`Error`] switches the whole pipeline onto the
//! failure track, and every later step is skipped without being evaluated.
//! The error that comes out the far end is the first one raised, unchanged.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `railway_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Validation then transformation
//!
//! ```
//! use railway_rail::{success, Error, RailExt};
//!
//! let ok = success(10)
//!     .ensure(|x| *x >= 0, Error::new("NEG", "negative"))
//!     .map(|x| x * 2);
//! assert_eq!(ok, Ok(20));
//!
//! let rejected = success(-5)
//!     .ensure(|x| *x >= 0, Error::new("NEG", "negative"))
//!     .map(|x| x * 2);
//! assert_eq!(rejected, Err(Error::new("NEG", "negative")));
//! ```
//!
//! ## First failure wins
//!
//! ```
//! use railway_rail::{failure, success, Error, RailExt};
//!
//! let result = success(1)
//!     .bind(|_| failure::<i32>(Error::new("E1", "m1")))
//!     .bind(|_| failure::<i32>(Error::new("E2", "m2")));
//!
//! assert_eq!(result, Err(Error::new("E1", "m1")));
//! ```
//!
//! ## Absence at a data-source boundary
//!
//! ```
//! use railway_rail::{from_optional, Error, RailExt};
//!
//! let rendered = from_optional(None::<u32>, Error::new("NOT_FOUND", "no such product"))
//!     .match_with(|id| format!("product {}", id), |e| e.to_string());
//!
//! assert_eq!(rendered, "NOT_FOUND: no such product");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Error construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits carrying the railway combinators
pub mod traits;
/// Error value, outcome aliases and factories
pub mod types;

/// Async combinators (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use traits::*;
pub use types::{create, failure, from_optional, success, unit, Error, Result, UnitResult};
