//! Outcome containers and the error value they carry.
//!
//! # Examples
//!
//! ```
//! use railway_rail::{success, Error, RailExt};
//!
//! let doubled = success(10)
//!     .ensure(|x| *x >= 0, Error::new("NEG", "negative"))
//!     .map(|x| x * 2);
//!
//! assert_eq!(doubled, Ok(20));
//! ```
pub(crate) mod alloc_type;
pub mod error;
pub mod result;

pub use error::Error;
pub use result::{create, failure, from_optional, success, unit, Result, UnitResult};
