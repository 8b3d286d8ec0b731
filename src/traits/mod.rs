//! Extension traits that give [`Result`](crate::Result) its railway combinators.
//!
//! - [`RailExt`]: `bind`, `tap`, `on_failure`, `ensure`, `match_with`, `to_unit`
//!   and the success/error observers
//! - [`OptionRailExt`]: turns an absent value into a failure
//! - `TraceFailureExt` (requires `tracing`): logs failures without altering them
//!
//! # Examples
//!
//! ```
//! use railway_rail::traits::{OptionRailExt, RailExt};
//! use railway_rail::Error;
//!
//! let name = Some("Laptop")
//!     .or_fail(Error::new("NOT_FOUND", "missing"))
//!     .ensure(|n| !n.trim().is_empty(), Error::new("INVALID_NAME", "Name cannot be empty."));
//!
//! assert_eq!(name, Ok("Laptop"));
//! ```

pub mod option_ext;
pub mod rail_ext;
#[cfg(feature = "tracing")]
pub mod trace_ext;

pub use option_ext::OptionRailExt;
pub use rail_ext::RailExt;
#[cfg(feature = "tracing")]
pub use trace_ext::TraceFailureExt;
