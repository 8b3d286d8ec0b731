use crate::types::{from_optional, Error, Result};

/// Bridges `Option` into the railway at data-source boundaries.
///
/// # Examples
///
/// ```
/// use railway_rail::traits::OptionRailExt;
/// use railway_rail::Error;
///
/// let stock: Option<u32> = None;
/// let r = stock.or_fail(Error::new("NOT_FOUND", "no stock record"));
/// assert_eq!(r.unwrap_err().code(), "NOT_FOUND");
/// ```
pub trait OptionRailExt<T> {
    /// Method form of [`from_optional`](crate::from_optional).
    fn or_fail(self, error: Error) -> Result<T>;

    /// Like [`or_fail`](OptionRailExt::or_fail), building the error only when absent.
    fn or_fail_with<F>(self, error_fn: F) -> Result<T>
    where
        F: FnOnce() -> Error;
}

impl<T> OptionRailExt<T> for Option<T> {
    #[inline]
    fn or_fail(self, error: Error) -> Result<T> {
        from_optional(self, error)
    }

    #[inline]
    fn or_fail_with<F>(self, error_fn: F) -> Result<T>
    where
        F: FnOnce() -> Error,
    {
        self.ok_or_else(error_fn)
    }
}
