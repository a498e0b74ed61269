//! `AsyncOutcome` - an asynchronous computation yielding an [`Outcome`].
//!
//! The asynchronous counterpart of [`Outcome`]. Combinators await the wrapped
//! computation, delegate to the synchronous (or `_async`) operation of the
//! same name and wrap the result in a new pending container, so the stages
//! of a chain run strictly in call order.
//!
//! # Entry Points
//!
//! - [`AsyncOutcome::begin`]: an already-settled `Success(())`
//! - [`AsyncOutcome::challenge`]: runs a synchronous closure, capturing a panic
//! - [`AsyncOutcome::try_async`] / [`AsyncOutcome::challenge_async`]: runs an
//!   asynchronous closure, capturing a panic raised while calling it or while
//!   polling its future
//! - [`AsyncOutcome::from_result_future`]: adapts a future yielding a
//!   standard-library `Result`
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Outcome;
//! use railway::effect::AsyncOutcome;
//!
//! futures::executor::block_on(async {
//!     let total = AsyncOutcome::<(), String>::begin()
//!         .map(|()| 20)
//!         .and_then_async(|v| async move { Outcome::success(v * 2) })
//!         .map_err(|error| format!("failed: {error}"))
//!         .await;
//!     assert_eq!(total, Outcome::Success(40));
//! });
//! ```
//!
//! Only the `challenge`/`try_async`/`attempt` family captures panics:
//!
//! ```rust
//! use railway::effect::AsyncOutcome;
//!
//! futures::executor::block_on(async {
//!     let error = AsyncOutcome::<i32, _>::try_async(|| async { panic!("x") })
//!         .unwrap_err()
//!         .await;
//!     assert_eq!(error.message(), Some("x"));
//! });
//! ```

use std::any::Any;
use std::fmt;
use std::future::{Future, IntoFuture};
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};

use super::AsyncPresence;
use crate::control::{Outcome, Thrown, UnwrapError};

/// A pending computation that settles exactly once with an [`Outcome`].
///
/// `AsyncOutcome` implements [`Future`], so it can be awaited directly.
#[must_use = "AsyncOutcome does nothing unless awaited"]
pub struct AsyncOutcome<T, E> {
    future: BoxFuture<'static, Outcome<T, E>>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<T: Send + 'static, E: Send + 'static> AsyncOutcome<T, E> {
    /// Wraps a future that yields an [`Outcome`].
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
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
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self::new(future)
    }

    /// Wraps a future that yields a standard-library `Result`.
    ///
    /// `Err(e)` settles as `Failure(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    /// use railway::effect::AsyncOutcome;
    ///
    /// futures::executor::block_on(async {
    ///     let parsed = AsyncOutcome::from_result_future(async { "17".parse::<u8>() });
    ///     assert_eq!(parsed.await, Outcome::Success(17));
    /// });
    /// ```
    pub fn from_result_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::new(future.map(Outcome::from))
    }

    /// Creates an already-settled `Success`.
    pub fn success(value: T) -> Self {
        Self::from(Outcome::Success(value))
    }

    /// Creates an already-settled `Failure`.
    pub fn failure(error: E) -> Self {
        Self::from(Outcome::Failure(error))
    }
}

impl<E: Send + 'static> AsyncOutcome<(), E> {
    /// Returns an already-settled `Success(())`, the canonical start of an
    /// asynchronous chain.
    pub fn begin() -> Self {
        Self::success(())
    }
}

impl<T: Send + 'static> AsyncOutcome<T, Thrown> {
    /// Runs `function` when awaited, capturing a panic as a `Failure`.
    pub fn challenge<F>(function: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::new(async move { Outcome::challenge(function) })
    }

    /// Runs an asynchronous `function` when awaited.
    ///
    /// A panic raised while calling `function` or while polling the future
    /// it returns settles as `Failure(Thrown)`. Any other value settles as
    /// `Success`.
    pub fn try_async<F, Fut>(function: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: IntoFuture<Output = T>,
        Fut::IntoFuture: Send + 'static,
    {
        Self::new(async move {
            let guarded = AssertUnwindSafe(async move { function().into_future().await })
                .catch_unwind()
                .await;
            match guarded {
                Ok(value) => Outcome::Success(value),
                Err(payload) => Outcome::Failure(Thrown::from_panic(payload)),
            }
        })
    }

    /// Alias of [`AsyncOutcome::try_async`].
    pub fn challenge_async<F, Fut>(function: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: IntoFuture<Output = T>,
        Fut::IntoFuture: Send + 'static,
    {
        Self::try_async(function)
    }
}

impl<T: Send + 'static, E: Send + 'static> From<Outcome<T, E>> for AsyncOutcome<T, E> {
    /// Lifts a settled [`Outcome`].
    fn from(outcome: Outcome<T, E>) -> Self {
        Self::new(futures::future::ready(outcome))
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<T, E> Future for AsyncOutcome<T, E> {
    type Output = Outcome<T, E>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.poll_unpin(context)
    }
}

impl<T, E> fmt::Debug for AsyncOutcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("AsyncOutcome").finish_non_exhaustive()
    }
}

// =============================================================================
// Transformation
// =============================================================================

impl<T: Send + 'static, E: Send + 'static> AsyncOutcome<T, E> {
    /// Applies `function` to the success value.
    pub fn map<U, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.map(function) })
    }

    /// Applies an asynchronous `function` to the success value.
    pub fn map_async<U, F, Fut>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = U>,
        Fut::IntoFuture: Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.map_async(function).await })
    }

    /// Applies `function` to the failure error.
    pub fn map_err<G, F>(self, function: F) -> AsyncOutcome<T, G>
    where
        G: Send + 'static,
        F: FnOnce(E) -> G + Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.map_err(function) })
    }

    /// Applies an asynchronous `function` to the failure error.
    pub fn map_err_async<G, F, Fut>(self, function: F) -> AsyncOutcome<T, G>
    where
        G: Send + 'static,
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = G>,
        Fut::IntoFuture: Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.map_err_async(function).await })
    }

    /// Chains a computation that may itself fail.
    pub fn and_then<U, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Outcome<U, E> + Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.and_then(function) })
    }

    /// Chains an asynchronous computation that may itself fail.
    ///
    /// `function` may return any future yielding an [`Outcome`], including
    /// another `AsyncOutcome`.
    pub fn and_then_async<U, F, Fut>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = Outcome<U, E>>,
        Fut::IntoFuture: Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.and_then_async(function).await })
    }

    /// Recovers from a failure with another computation.
    pub fn or_else<G, F>(self, function: F) -> AsyncOutcome<T, G>
    where
        G: Send + 'static,
        F: FnOnce(E) -> Outcome<T, G> + Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.or_else(function) })
    }

    /// Recovers from a failure with an asynchronous computation.
    pub fn or_else_async<G, F, Fut>(self, function: F) -> AsyncOutcome<T, G>
    where
        G: Send + 'static,
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = Outcome<T, G>>,
        Fut::IntoFuture: Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.or_else_async(function).await })
    }

    /// Settles to `other` after a success, otherwise keeps the failure.
    ///
    /// `other` is only awaited after a success.
    pub fn and<U, O>(self, other: O) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        O: Into<AsyncOutcome<U, E>>,
    {
        let other = other.into();
        AsyncOutcome::new(async move {
            match self.await {
                Outcome::Success(_) => other.await,
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Keeps a success, otherwise settles to `other`.
    ///
    /// `other` is only awaited after a failure.
    pub fn or<G, O>(self, other: O) -> AsyncOutcome<T, G>
    where
        G: Send + 'static,
        O: Into<AsyncOutcome<T, G>>,
    {
        let other = other.into();
        AsyncOutcome::new(async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(_) => other.await,
            }
        })
    }

    /// Like [`Outcome::attempt`]: a panic inside `function` settles as
    /// `Failure(Thrown)`.
    pub fn attempt<U, F>(self, function: F) -> AsyncOutcome<U, Thrown>
    where
        E: Any,
        U: Send + 'static,
        F: FnOnce(T) -> Outcome<U, E> + Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.attempt(function) })
    }

    /// Like [`Outcome::attempt_async`], catching panics raised while calling
    /// `function` or polling its future.
    pub fn attempt_async<U, F, Fut>(self, function: F) -> AsyncOutcome<U, Thrown>
    where
        E: Any,
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = Outcome<U, E>>,
        Fut::IntoFuture: Send + 'static,
    {
        AsyncOutcome::new(async move { self.await.attempt_async(function).await })
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into an [`AsyncPresence`], discarding the error.
    pub fn to_presence(self) -> AsyncPresence<T> {
        AsyncPresence::new(async move { self.await.to_presence() })
    }

    /// Converts into an [`AsyncPresence`] of the error, discarding the value.
    pub fn err(self) -> AsyncPresence<E> {
        AsyncPresence::new(async move { self.await.err() })
    }

    /// Turns the container into a cloneable handle on the single settled
    /// value.
    pub fn shared(self) -> Shared<Self>
    where
        T: Clone,
        E: Clone,
    {
        FutureExt::shared(self)
    }
}

// =============================================================================
// Terminal Operations
// =============================================================================

impl<T: Send + 'static, E: Send + 'static> AsyncOutcome<T, E> {
    /// Awaits the computation and returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapError::UnwrapOnFailure`] if the computation
    /// settles as a failure.
    pub async fn unwrap(self) -> T {
        self.await.unwrap()
    }

    /// Awaits the computation and returns the failure error.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapError::UnwrapErrOnSuccess`] if the computation
    /// settles as a success.
    pub async fn unwrap_err(self) -> E {
        self.await.unwrap_err()
    }

    /// Awaits the computation and returns the success value or an
    /// [`UnwrapError`].
    ///
    /// # Errors
    ///
    /// Returns `Err(UnwrapError::UnwrapOnFailure)` for a failure.
    pub async fn try_unwrap(self) -> Result<T, UnwrapError> {
        self.await.try_unwrap()
    }

    /// Awaits the computation and returns the failure error or an
    /// [`UnwrapError`].
    ///
    /// # Errors
    ///
    /// Returns `Err(UnwrapError::UnwrapErrOnSuccess)` for a success.
    pub async fn try_unwrap_err(self) -> Result<E, UnwrapError> {
        self.await.try_unwrap_err()
    }

    /// Awaits the computation and returns the value or `alternative`.
    pub async fn unwrap_or(self, alternative: T) -> T {
        self.await.unwrap_or(alternative)
    }

    /// Awaits the computation and returns the value or recovers one from the
    /// error.
    pub async fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.await.unwrap_or_else(function)
    }

    /// Awaits the computation and applies exactly one of two handlers.
    pub async fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        self.await.fold(on_success, on_failure)
    }

    /// Awaits the computation and tests the success value.
    pub async fn test<P>(self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.await.test(predicate)
    }

    /// Awaits the computation and tests the success value with an
    /// asynchronous `predicate`.
    pub async fn test_async<P, Fut>(self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = bool>,
        Fut::IntoFuture: Send + 'static,
    {
        self.await.test_async(predicate).await
    }

    /// Awaits the computation and converts into a standard-library `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` for a failure.
    pub async fn into_result(self) -> Result<T, E> {
        self.await.into_result()
    }
}
