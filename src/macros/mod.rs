//! Shorthand macros for building railway errors.
//!
//! - [`macro@crate::rail_error`] - Builds an [`Error`](crate::Error) whose
//!   message is formatted like `format!`.
//! - [`macro@crate::fail`] - Wraps the same error in `Err`, for the failure
//!   arm of a step.
//!
//! Neither macro returns early; both are plain expressions.
//!
//! # Examples
//!
//! ```
//! use railway_rail::{fail, rail_error, RailExt, Result};
//!
//! fn get_by_id(id: u32) -> Result<&'static str> {
//!     if id == 1 {
//!         Ok("Laptop")
//!     } else {
//!         fail!("PRODUCT_NOT_FOUND", "Product with ID {} was not found.", id)
//!     }
//! }
//!
//! assert_eq!(get_by_id(1), Ok("Laptop"));
//! assert_eq!(
//!     get_by_id(9).error(),
//!     &rail_error!("PRODUCT_NOT_FOUND", "Product with ID {} was not found.", 9)
//! );
//! ```

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}

/// Builds an [`Error`](crate::Error) from a code and a formatted message.
///
/// # Arguments
///
/// The first argument is the code; the rest are passed to `format!`.
///
/// # Examples
///
/// ```
/// use railway_rail::rail_error;
///
/// let qty = 3;
/// let err = rail_error!("INSUFFICIENT_STOCK", "cannot remove {} units", qty);
/// assert_eq!(err.to_string(), "INSUFFICIENT_STOCK: cannot remove 3 units");
/// ```
#[macro_export]
macro_rules! rail_error {
    ($code:expr, $($arg:tt)+) => {
        $crate::Error::new($code, $crate::macros::__private::format!($($arg)+))
    };
}

/// Evaluates to `Err(rail_error!(..))`.
///
/// # Examples
///
/// ```
/// use railway_rail::{fail, Result};
///
/// let r: Result<u32> = fail!("INVALID_SEARCH", "Search name cannot be empty.");
/// assert_eq!(r.unwrap_err().code(), "INVALID_SEARCH");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)+) => {
        ::core::result::Result::Err($crate::rail_error!($($arg)+))
    };
}
