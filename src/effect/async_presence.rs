//! `AsyncPresence` - an asynchronous computation yielding a [`Presence`].
//!
//! Every combinator awaits the wrapped computation, delegates to the matching
//! [`Presence`] operation and wraps the result in a new pending container.
//! Stages of one chain therefore run strictly one after another. The terminal
//! operations (`unwrap`, `unwrap_or`, `unwrap_or_else`, `fold`, `test`) await
//! the chain and return a plain value.
//!
//! Nothing runs until the container is awaited. A panic inside the wrapped
//! computation or a user closure propagates to the awaiting task.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Presence;
//! use railway::effect::AsyncPresence;
//!
//! futures::executor::block_on(async {
//!     let value = AsyncPresence::present(5)
//!         .map(|v| v * 2)
//!         .and_then_async(|v| async move { Presence::present(v + 1) })
//!         .filter(|v| *v > 10)
//!         .unwrap_or(0)
//!         .await;
//!     assert_eq!(value, 11);
//! });
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};

use super::AsyncOutcome;
use crate::control::{Presence, UnwrapError};

/// A pending computation that settles exactly once with a [`Presence`].
///
/// `AsyncPresence` implements [`Future`], so it can be awaited directly. The
/// wrapped computation is owned exclusively by the container.
#[must_use = "AsyncPresence does nothing unless awaited"]
pub struct AsyncPresence<T> {
    future: BoxFuture<'static, Presence<T>>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<T: Send + 'static> AsyncPresence<T> {
    /// Wraps a future that yields a [`Presence`].
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Presence<T>> + Send + 'static,
    {
        Self {
            future: future.boxed(),
        }
    }

    /// Creates the container from an existing future.
    ///
    /// The future should not have been polled yet. Equivalent to `new`.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Presence<T>> + Send + 'static,
    {
        Self::new(future)
    }

    /// Wraps a future that yields a standard-library `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    /// use railway::effect::AsyncPresence;
    ///
    /// futures::executor::block_on(async {
    ///     let found = AsyncPresence::from_option_future(async { Some("row") });
    ///     assert_eq!(found.await, Presence::Present("row"));
    /// });
    /// ```
    pub fn from_option_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        Self::new(future.map(Presence::from))
    }

    /// Creates an already-settled `Present` container.
    pub fn present(value: T) -> Self {
        Self::from(Presence::Present(value))
    }

    /// Creates an already-settled `Absent` container.
    pub fn absent() -> Self {
        Self::from(Presence::Absent)
    }
}

impl<T: Send + 'static> From<Presence<T>> for AsyncPresence<T> {
    /// Lifts a settled [`Presence`].
    fn from(presence: Presence<T>) -> Self {
        Self::new(futures::future::ready(presence))
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<T> Future for AsyncPresence<T> {
    type Output = Presence<T>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.poll_unpin(context)
    }
}

impl<T> fmt::Debug for AsyncPresence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("AsyncPresence").finish_non_exhaustive()
    }
}

// =============================================================================
// Transformation
// =============================================================================

impl<T: Send + 'static> AsyncPresence<T> {
    /// Applies `function` to a present value once the computation settles.
    pub fn map<U, F>(self, function: F) -> AsyncPresence<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncPresence::new(async move { self.await.map(function) })
    }

    /// Applies an asynchronous `function` to a present value.
    pub fn map_async<U, F, Fut>(self, function: F) -> AsyncPresence<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = U>,
        Fut::IntoFuture: Send + 'static,
    {
        AsyncPresence::new(async move { self.await.map_async(function).await })
    }

    /// Chains a computation that may itself be absent.
    pub fn and_then<U, F>(self, function: F) -> AsyncPresence<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Presence<U> + Send + 'static,
    {
        AsyncPresence::new(async move { self.await.and_then(function) })
    }

    /// Chains an asynchronous computation that may itself be absent.
    ///
    /// `function` may return any future yielding a [`Presence`], including
    /// another `AsyncPresence`.
    pub fn and_then_async<U, F, Fut>(self, function: F) -> AsyncPresence<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = Presence<U>>,
        Fut::IntoFuture: Send + 'static,
    {
        AsyncPresence::new(async move { self.await.and_then_async(function).await })
    }

    /// Keeps a present value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        Self::new(async move { self.await.filter(predicate) })
    }

    /// Keeps a present value only if the asynchronous `predicate` accepts it.
    pub fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = bool>,
        Fut::IntoFuture: Send + 'static,
    {
        Self::new(async move { self.await.filter_async(predicate).await })
    }

    /// Fills an absent result with `value`.
    pub fn insert(self, value: T) -> Self {
        Self::new(async move { self.await.insert(value) })
    }

    /// Fills an absent result with the value of `function`.
    pub fn insert_with<F>(self, function: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::new(async move { self.await.insert_with(function) })
    }

    /// Fills an absent result with the value of an asynchronous `function`.
    pub fn insert_with_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: IntoFuture<Output = T>,
        Fut::IntoFuture: Send + 'static,
    {
        Self::new(async move { self.await.insert_with_async(function).await })
    }

    // =========================================================================
    // Boolean-like Combination
    // =========================================================================

    /// Settles to `other` if this settles present, otherwise to `Absent`.
    ///
    /// `other` is only awaited when this container is present.
    pub fn and<U, O>(self, other: O) -> AsyncPresence<U>
    where
        U: Send + 'static,
        O: Into<AsyncPresence<U>>,
    {
        let other = other.into();
        AsyncPresence::new(async move {
            match self.await {
                Presence::Present(_) => other.await,
                Presence::Absent => Presence::Absent,
            }
        })
    }

    /// Settles to this value if present, otherwise to `other`.
    ///
    /// `other` is only awaited when this container is absent.
    pub fn or<O>(self, other: O) -> Self
    where
        O: Into<Self>,
    {
        let other = other.into();
        Self::new(async move {
            match self.await {
                Presence::Present(value) => Presence::Present(value),
                Presence::Absent => other.await,
            }
        })
    }

    /// Settles to whichever side is present when exactly one of them is.
    ///
    /// Both sides are awaited, this one first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    /// use railway::effect::AsyncPresence;
    ///
    /// futures::executor::block_on(async {
    ///     let left = AsyncPresence::present(1).xor(Presence::<i32>::absent()).await;
    ///     assert_eq!(left, Presence::Present(1));
    ///
    ///     let both = AsyncPresence::present(1).xor(AsyncPresence::present(2)).await;
    ///     assert_eq!(both, Presence::Absent);
    /// });
    /// ```
    pub fn xor<O>(self, other: O) -> Self
    where
        O: Into<Self>,
    {
        let other = other.into();
        Self::new(async move {
            let this = self.await;
            this.xor(other.await)
        })
    }

    /// Settles to the result of `function` if this settles absent.
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Presence<T> + Send + 'static,
    {
        Self::new(async move { self.await.or_else(function) })
    }

    /// Settles to the result of an asynchronous `function` if this settles
    /// absent.
    pub fn or_else_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: IntoFuture<Output = Presence<T>>,
        Fut::IntoFuture: Send + 'static,
    {
        Self::new(async move { self.await.or_else_async(function).await })
    }

    /// Pairs two present values.
    pub fn zip<U, O>(self, other: O) -> AsyncPresence<(T, U)>
    where
        U: Send + 'static,
        O: Into<AsyncPresence<U>>,
    {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two present values with `function`.
    ///
    /// `other` is only awaited when this container is present.
    pub fn zip_with<U, R, O, F>(self, other: O, function: F) -> AsyncPresence<R>
    where
        U: Send + 'static,
        R: Send + 'static,
        O: Into<AsyncPresence<U>>,
        F: FnOnce(T, U) -> R + Send + 'static,
    {
        let other = other.into();
        AsyncPresence::new(async move {
            match self.await {
                Presence::Present(left) => other.await.map(|right| function(left, right)),
                Presence::Absent => Presence::Absent,
            }
        })
    }

    /// Combines two present values with an asynchronous `function`.
    pub fn zip_with_async<U, R, O, F, Fut>(self, other: O, function: F) -> AsyncPresence<R>
    where
        U: Send + 'static,
        R: Send + 'static,
        O: Into<AsyncPresence<U>>,
        F: FnOnce(T, U) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = R>,
        Fut::IntoFuture: Send + 'static,
    {
        let other = other.into();
        AsyncPresence::new(async move {
            match self.await {
                Presence::Present(left) => {
                    let right = other.await;
                    Presence::Present(left).zip_with_async(right, function).await
                }
                Presence::Absent => Presence::Absent,
            }
        })
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into an [`AsyncOutcome`], producing the error with
    /// `error_function` when absent.
    pub fn to_outcome<E, F>(self, error_function: F) -> AsyncOutcome<T, E>
    where
        E: Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.to_outcome(error_function) })
    }

    /// Converts into an [`AsyncOutcome`], awaiting the error from
    /// `error_function` when absent.
    pub fn to_outcome_async<E, F, Fut>(self, error_function: F) -> AsyncOutcome<T, E>
    where
        E: Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: IntoFuture<Output = E>,
        Fut::IntoFuture: Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.to_outcome_async(error_function).await })
    }

    /// Turns the container into a cloneable handle on the single settled
    /// value.
    ///
    /// The wrapped computation still runs once; every clone of the handle
    /// observes the same result.
    pub fn shared(self) -> Shared<Self>
    where
        T: Clone,
    {
        FutureExt::shared(self)
    }
}

// =============================================================================
// Terminal Operations
// =============================================================================

impl<T: Send + 'static> AsyncPresence<T> {
    /// Awaits the computation and returns the present value.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapError::EmptyAccess`] if the computation settles
    /// absent.
    pub async fn unwrap(self) -> T {
        self.await.unwrap()
    }

    /// Awaits the computation and returns the value or
    /// [`UnwrapError::EmptyAccess`].
    ///
    /// # Errors
    ///
    /// Returns `Err(UnwrapError::EmptyAccess)` if the computation settles
    /// absent.
    pub async fn try_unwrap(self) -> Result<T, UnwrapError> {
        self.await.try_unwrap()
    }

    /// Awaits the computation and returns the value or `alternative`.
    pub async fn unwrap_or(self, alternative: T) -> T {
        self.await.unwrap_or(alternative)
    }

    /// Awaits the computation and returns the value or the result of
    /// `function`.
    pub async fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.unwrap_or_else(function)
    }

    /// Awaits the computation and applies exactly one of two handlers.
    pub async fn fold<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        self.await.fold(on_present, on_absent)
    }

    /// Awaits the computation and tests the value with `predicate`.
    pub async fn test<P>(self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.await.test(predicate)
    }

    /// Awaits the computation and tests the value with an asynchronous
    /// `predicate`.
    pub async fn test_async<P, Fut>(self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = bool>,
        Fut::IntoFuture: Send + 'static,
    {
        self.await.test_async(predicate).await
    }

    /// Awaits the computation and converts into a standard-library `Option`.
    pub async fn into_option(self) -> Option<T> {
        self.await.into_option()
    }
}
