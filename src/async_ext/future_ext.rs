//! Extension trait for `Future<Output = Result<T>>`.
//!
//! Provides the async counterparts of the [`RailExt`](crate::traits::RailExt)
//! combinators. Each stage awaits the incoming result first; a failure
//! completes the stage at once, so the stage's closure is never called and
//! nothing it would have produced is ever awaited.

use core::future::{Future, Ready};

use crate::types::{Error, Result};

use super::bind::BindAsync;
use super::ensure::EnsureAsync;
use super::map::MapAsync;
use super::tap::TapAsync;

/// Lifts a ready [`Result`](crate::Result) into a future so it can head an
/// async chain.
///
/// # Examples
///
/// ```rust
/// use railway_rail::async_ext::{lift, FutureRailExt};
/// use railway_rail::success;
///
/// async fn example() {
///     let doubled = lift(success(21)).map_async(|x| x * 2).await;
///     assert_eq!(doubled, Ok(42));
/// }
/// ```
#[inline]
pub fn lift<T>(result: Result<T>) -> Ready<Result<T>> {
    core::future::ready(result)
}

/// Railway combinators for futures that resolve to a [`Result`](crate::Result).
///
/// Chains resolve strictly left to right: a stage's closure runs only after
/// the previous stage has resolved, and no stage is polled concurrently with
/// another. Dropping a chain while a stage is suspended drops that stage and
/// every closure not yet called; the combinators hold no other state.
///
/// # Examples
///
/// ```rust,no_run
/// use railway_rail::prelude_async::*;
///
/// #[derive(Debug, Clone)]
/// struct Product {
///     name: String,
///     stock: u32,
/// }
///
/// async fn load(_id: u32) -> Result<Product> {
///     failure(Error::new("PRODUCT_NOT_FOUND", "Product with ID 7 was not found."))
/// }
///
/// async fn in_stock(product: Product) -> Result<Product> {
///     load(7)
///         .ensure_async(
///             |p| {
///                 let stock = p.stock;
///                 async move { stock > 0 }
///             },
///             Error::new("INSUFFICIENT_STOCK", "Not enough stock available."),
///         )
///         .map_async(move |_| product)
///         .await
/// }
/// ```
pub trait FutureRailExt<T>: Future<Output = Result<T>> + Sized {
    /// Applies `f` to the success value once the incoming result resolves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let r = async { success(5) }.map_async(|x| x + 1).await;
    ///     assert_eq!(r, Ok(6));
    /// }
    /// ```
    #[inline]
    fn map_async<U, F>(self, f: F) -> MapAsync<Self, F>
    where
        F: FnOnce(T) -> U,
    {
        MapAsync::new(self, f)
    }

    /// Chains an async fallible step built from the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let r = async { success(5) }
    ///         .bind_async(|x| async move { success(x * 10) })
    ///         .await;
    ///     assert_eq!(r, Ok(50));
    /// }
    /// ```
    #[inline]
    fn bind_async<U, F, Next>(self, f: F) -> BindAsync<Self, F, Next>
    where
        F: FnOnce(T) -> Next,
        Next: Future<Output = Result<U>>,
    {
        BindAsync::new(self, f)
    }

    /// Runs an async side effect on the success value, then yields the value
    /// unchanged.
    ///
    /// The effect's future cannot borrow the value; copy out what it needs.
    #[inline]
    fn tap_async<F, Act>(self, action: F) -> TapAsync<Self, F, Act, T>
    where
        F: FnOnce(&T) -> Act,
        Act: Future<Output = ()>,
    {
        TapAsync::new(self, action)
    }

    /// Fails with `error` when the async `predicate` rejects the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let r = async { success(-1) }
    ///         .ensure_async(|x| {
    ///             let x = *x;
    ///             async move { x >= 0 }
    ///         }, Error::new("NEG", "negative"))
    ///         .await;
    ///     assert_eq!(r, Err(Error::new("NEG", "negative")));
    /// }
    /// ```
    #[inline]
    fn ensure_async<P, Check>(self, predicate: P, error: Error) -> EnsureAsync<Self, P, Check, T>
    where
        P: FnOnce(&T) -> Check,
        Check: Future<Output = bool>,
    {
        EnsureAsync::new(self, predicate, error)
    }
}

impl<Fut, T> FutureRailExt<T> for Fut where Fut: Future<Output = Result<T>> {}
