//! Outcome containers and their factories.
//!
//! A railway outcome is the native tagged union `Result<T, Error>`: the
//! success track carries a `T`, the failure track carries an [`Error`], and
//! there is no way to build a value that is both or neither. The unit shape
//! is simply `Result<()>`.
//!
//! Construct outcomes through the factories in this module rather than
//! spelling out `Ok`/`Err`, so pipelines read the same way at every entry
//! point.

use crate::types::Error;

/// Value-carrying outcome: success with a `T`, or failure with an [`Error`].
///
/// Defaults to the unit shape, so `Result` alone describes operations whose
/// success carries no data.
pub type Result<T = ()> = core::result::Result<T, Error>;

/// Outcome of an operation whose success carries no data.
pub type UnitResult = Result<()>;

/// Builds a successful outcome holding `value`.
///
/// Never fails; validating `value` is the caller's concern (see
/// [`RailExt::ensure`](crate::traits::RailExt::ensure)).
///
/// # Examples
///
/// ```
/// use railway_rail::{success, RailExt};
///
/// let r = success(10);
/// assert!(r.is_success());
/// assert!(r.error().is_none());
/// ```
#[inline]
pub fn success<T>(value: T) -> Result<T> {
    Ok(value)
}

/// Alias for [`success`], used at the head of validation chains.
///
/// # Examples
///
/// ```
/// use railway_rail::{create, Error, RailExt};
///
/// let price = create(19.99)
///     .ensure(|p| *p >= 0.0, Error::new("INVALID_PRICE", "Price cannot be negative."));
/// assert_eq!(price, Ok(19.99));
/// ```
#[inline]
pub fn create<T>(value: T) -> Result<T> {
    success(value)
}

/// Builds a failed outcome carrying `error`.
///
/// # Examples
///
/// ```
/// use railway_rail::{failure, Error, RailExt};
///
/// let r = failure::<i32>(Error::new("E1", "m1"));
/// assert!(!r.is_success());
/// assert_eq!(r.error(), &Error::new("E1", "m1"));
/// ```
#[inline]
pub fn failure<T>(error: Error) -> Result<T> {
    Err(error)
}

/// Converts an optional value into an outcome, failing with `error` when absent.
///
/// This is where "nothing found" at a data-source boundary joins the railway.
///
/// # Examples
///
/// ```
/// use railway_rail::{from_optional, Error};
///
/// let missing: Option<u32> = None;
/// let err = Error::new("NOT_FOUND", "no such product");
///
/// assert_eq!(from_optional(Some(3), err.clone()), Ok(3));
/// assert_eq!(from_optional(missing, err.clone()), Err(err));
/// ```
#[inline]
pub fn from_optional<T>(value: Option<T>, error: Error) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => Err(error),
    }
}

/// Factories for the unit outcome, `Result<()>`.
pub mod unit {
    use super::UnitResult;
    use crate::types::Error;

    /// Successful unit outcome.
    #[inline]
    pub fn success() -> UnitResult {
        Ok(())
    }

    /// Alias for [`success`].
    #[inline]
    pub fn create() -> UnitResult {
        success()
    }

    /// Failed unit outcome carrying `error`.
    #[inline]
    pub fn failure(error: Error) -> UnitResult {
        Err(error)
    }
}
