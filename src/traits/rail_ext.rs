//! Synchronous railway combinators for [`Result`](crate::Result).
//!
//! This module provides [`RailExt`], which adds the combinators that the
//! standard `Result` does not already offer under the same semantics.
//! `map` is deliberately absent: the inherent [`Result::map`] already applies
//! the function on the success track and passes the [`Error`] through
//! untouched, so it is used as is.
//!
//! Every combinator consumes its receiver and returns a new outcome. Once a
//! chain is on the failure track, no success-path closure runs again and the
//! first [`Error`] reaches the end of the chain unchanged.
//!
//! # Examples
//!
//! ```
//! use railway_rail::{success, Error, RailExt};
//!
//! let result = success(-5)
//!     .ensure(|x| *x >= 0, Error::new("NEG", "negative"))
//!     .map(|x| x * 2);
//!
//! assert_eq!(result, Err(Error::new("NEG", "negative")));
//! ```

use crate::types::{Error, Result};

/// Extension trait with the railway combinators for [`Result<T>`](crate::Result).
///
/// # Examples
///
/// ## Validation chain
///
/// ```
/// use railway_rail::{create, Error, RailExt};
///
/// fn parse_stock(qty: i32) -> railway_rail::Result<u32> {
///     create(qty)
///         .ensure(|q| *q >= 0, Error::new("INSUFFICIENT_STOCK", "Not enough stock available."))
///         .map(|q| q as u32)
/// }
///
/// assert_eq!(parse_stock(3), Ok(3));
/// assert_eq!(parse_stock(-1).unwrap_err().code(), "INSUFFICIENT_STOCK");
/// ```
///
/// ## Folding at the boundary
///
/// ```
/// use railway_rail::{failure, Error, RailExt};
///
/// let rendered = failure::<u32>(Error::new("NOT_FOUND", "missing"))
///     .match_with(|v| format!("found {}", v), |e| e.to_string());
///
/// assert_eq!(rendered, "NOT_FOUND: missing");
/// ```
pub trait RailExt<T>: Sized {
    /// Returns `true` on the success track.
    fn is_success(&self) -> bool;

    /// Returns `true` on the failure track.
    fn is_failure(&self) -> bool;

    /// Returns the carried error, or [`Error::NONE`] on success.
    fn error(&self) -> &Error;

    /// Returns the success value, if any.
    fn value(&self) -> Option<&T>;

    /// Chains a fallible step, flattening one level.
    ///
    /// On success, returns `f(value)`. On failure, returns the original error
    /// retyped to `U`; `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway_rail::{failure, success, Error, RailExt};
    ///
    /// let half = |x: i32| if x % 2 == 0 { success(x / 2) } else { failure(Error::new("ODD", "odd")) };
    ///
    /// assert_eq!(success(8).bind(half), Ok(4));
    /// assert_eq!(success(3).bind(half), Err(Error::new("ODD", "odd")));
    /// ```
    fn bind<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>;

    /// Runs `action` on the success value and returns the receiver unchanged.
    fn tap<F>(self, action: F) -> Result<T>
    where
        F: FnOnce(&T);

    /// Runs `action` on the error and returns the receiver unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway_rail::{failure, Error, RailExt};
    ///
    /// let mut seen = None;
    /// let r = failure::<()>(Error::new("E", "boom")).on_failure(|e| seen = Some(e.code().to_owned()));
    ///
    /// assert!(r.is_failure());
    /// assert_eq!(seen.as_deref(), Some("E"));
    /// ```
    fn on_failure<F>(self, action: F) -> Result<T>
    where
        F: FnOnce(&Error);

    /// Fails with `error` when `predicate` rejects the success value.
    ///
    /// An already failed receiver passes through untouched, even if `error`
    /// differs from the one it carries, and `predicate` is not called.
    fn ensure<P>(self, predicate: P, error: Error) -> Result<T>
    where
        P: FnOnce(&T) -> bool;

    /// Like [`ensure`](RailExt::ensure), but builds the error from the
    /// rejected value, only when the predicate fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway_rail::{success, Error, RailExt};
    ///
    /// let r = success(120).ensure_with(
    ///     |age| *age < 100,
    ///     |age| Error::new("INVALID_AGE", format!("{} is not a plausible age", age)),
    /// );
    /// assert_eq!(r.unwrap_err().message(), "120 is not a plausible age");
    /// ```
    fn ensure_with<P, F>(self, predicate: P, error_fn: F) -> Result<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Error;

    /// Folds the outcome into a single value; exactly one branch runs.
    fn match_with<R, S, E>(self, on_success: S, on_failure: E) -> R
    where
        S: FnOnce(T) -> R,
        E: FnOnce(Error) -> R;

    /// Discards the success payload, keeping the error on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway_rail::{success, RailExt};
    ///
    /// assert_eq!(success("saved").to_unit(), Ok(()));
    /// ```
    fn to_unit(self) -> Result<()>;
}

impl<T> RailExt<T> for Result<T> {
    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn is_failure(&self) -> bool {
        self.is_err()
    }

    #[inline]
    fn error(&self) -> &Error {
        match self {
            Ok(_) => Error::sentinel(),
            Err(error) => error,
        }
    }

    #[inline]
    fn value(&self) -> Option<&T> {
        self.as_ref().ok()
    }

    #[inline]
    fn bind<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        match self {
            Ok(value) => f(value),
            Err(error) => Err(error),
        }
    }

    #[inline]
    fn tap<F>(self, action: F) -> Result<T>
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self {
            action(value);
        }
        self
    }

    #[inline]
    fn on_failure<F>(self, action: F) -> Result<T>
    where
        F: FnOnce(&Error),
    {
        if let Err(error) = &self {
            action(error);
        }
        self
    }

    #[inline]
    fn ensure<P>(self, predicate: P, error: Error) -> Result<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Ok(value) => {
                if predicate(&value) {
                    Ok(value)
                } else {
                    Err(error)
                }
            },
            Err(existing) => Err(existing),
        }
    }

    #[inline]
    fn ensure_with<P, F>(self, predicate: P, error_fn: F) -> Result<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Error,
    {
        match self {
            Ok(value) => {
                if predicate(&value) {
                    Ok(value)
                } else {
                    Err(error_fn(&value))
                }
            },
            Err(existing) => Err(existing),
        }
    }

    #[inline]
    fn match_with<R, S, E>(self, on_success: S, on_failure: E) -> R
    where
        S: FnOnce(T) -> R,
        E: FnOnce(Error) -> R,
    {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    #[inline]
    fn to_unit(self) -> Result<()> {
        self.map(|_| ())
    }
}
