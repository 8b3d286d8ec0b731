//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use railway_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`rail_error!`], [`fail!`]
//! - **Types**: [`Error`], [`Result`], [`UnitResult`]
//! - **Factories**: [`success`], [`create`], [`failure`], [`from_optional`], [`unit`]
//! - **Traits**: [`RailExt`], [`OptionRailExt`]
//!
//! # Examples
//!
//! ```
//! use railway_rail::prelude::*;
//!
//! fn rename(name: &str) -> Result<String> {
//!     create(name)
//!         .ensure(|n| !n.trim().is_empty(), Error::new("INVALID_NAME", "Name cannot be empty."))
//!         .map(str::to_owned)
//! }
//!
//! assert_eq!(rename("Mouse"), Ok("Mouse".to_owned()));
//! assert_eq!(rename("  ").unwrap_err().code(), "INVALID_NAME");
//! ```

// Macros
pub use crate::{fail, rail_error};

// Core types and factories
pub use crate::types::{
    create, failure, from_optional, success, unit, Error, Result, UnitResult,
};

// Traits
pub use crate::traits::{OptionRailExt, RailExt};
#[cfg(feature = "tracing")]
pub use crate::traits::TraceFailureExt;
