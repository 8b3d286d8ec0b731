//! The flat failure descriptor carried on the failure track.
//!
//! [`Error`] is a plain value: a machine-readable `code` plus a human-readable
//! `message`. It is compared by value, never wrapped, and never annotated as it
//! travels through a chain of combinators.

use core::fmt::{self, Display};

use crate::types::alloc_type::{Cow, String};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable failure value with a code and a message.
///
/// Codes and messages are stored as `Cow<'static, str>`, so the common case of
/// static literals allocates nothing, while formatted messages are still
/// accepted through `String`.
///
/// # Examples
///
/// ```
/// use railway_rail::Error;
///
/// let err = Error::new("NOT_FOUND", "product 7 was not found");
/// assert_eq!(err.code(), "NOT_FOUND");
/// assert_eq!(err.to_string(), "NOT_FOUND: product 7 was not found");
///
/// let bare = Error::new("", "something went wrong");
/// assert_eq!(bare.to_string(), "something went wrong");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

static SENTINEL: Error = Error::NONE;

impl Error {
    /// The "no error" sentinel: empty code, empty message.
    ///
    /// [`RailExt::error`](crate::traits::RailExt::error) yields a reference to
    /// this value for successful results.
    pub const NONE: Error = Error { code: Cow::Borrowed(""), message: Cow::Borrowed("") };

    /// Creates an error from a code and a message.
    ///
    /// # Arguments
    ///
    /// * `code` - Short machine-readable identifier such as `"INVALID_PRICE"`
    /// * `message` - Human-readable description
    ///
    /// # Examples
    ///
    /// ```
    /// use railway_rail::Error;
    ///
    /// let id = 42;
    /// let err = Error::new("NOT_FOUND", format!("product {} was not found", id));
    /// assert_eq!(err.message(), "product 42 was not found");
    /// ```
    #[inline]
    pub fn new<C, M>(code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self { code: code.into(), message: message.into() }
    }

    /// Returns the empty sentinel by value.
    #[inline]
    pub const fn none() -> Self {
        Self::NONE
    }

    #[inline]
    pub(crate) fn sentinel() -> &'static Error {
        &SENTINEL
    }

    /// Returns the error code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` when this is the empty sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway_rail::Error;
    ///
    /// assert!(Error::none().is_none());
    /// assert!(!Error::new("E", "boom").is_none());
    /// ```
    #[inline]
    pub fn is_none(&self) -> bool {
        self.code.is_empty() && self.message.is_empty()
    }

    /// Consumes the error and returns its owned `(code, message)` parts.
    #[inline]
    pub fn into_parts(self) -> (String, String) {
        (self.code.into_owned(), self.message.into_owned())
    }
}

impl Default for Error {
    #[inline]
    fn default() -> Self {
        Self::NONE
    }
}

impl Display for Error {
    /// Renders the message alone when the code is blank, `code: message` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.trim().is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl core::error::Error for Error {}
