//! Outcome type - a computation that either succeeded or failed.
//!
//! This module provides the `Outcome<T, E>` type, which is either
//! `Success(T)` or `Failure(E)`. Combinators act on the success channel and
//! pass a failure through untouched, so a chain stops doing work at the first
//! failure without any explicit branching.
//!
//! Panics raised by user closures propagate out of every combinator except
//! [`Outcome::challenge`] and [`Outcome::attempt`], which convert them into a
//! `Failure` carrying an opaque [`Thrown`] payload.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Outcome;
//!
//! let checked = Outcome::<i32, &str>::success(3)
//!     .and_then(|v| if v > 0 { Outcome::success(v) } else { Outcome::failure("neg") });
//! assert_eq!(checked.unwrap(), 3);
//!
//! let shouted = Outcome::<i32, &str>::failure("bad").map_err(|e| e.to_uppercase());
//! assert_eq!(shouted.unwrap_err(), "BAD");
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::error::UnwrapError;
use super::iter::{IntoIter, Iter};
use super::presence::Presence;
use super::thrown::Thrown;

/// The result of a computation: a success value or a failure error.
///
/// Exactly one of the two payloads exists at a time.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure error
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

// =============================================================================
// Construction
// =============================================================================

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }
}

impl<E> Outcome<(), E> {
    /// Returns `Success(())`, the canonical start of a chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let total = Outcome::<(), String>::begin_chain()
    ///     .map(|()| 40)
    ///     .map(|value| value + 2);
    /// assert_eq!(total, Outcome::Success(42));
    /// ```
    #[inline]
    pub const fn begin_chain() -> Self {
        Self::Success(())
    }
}

impl<T> Outcome<T, Thrown> {
    /// Runs `function`, capturing a panic as a `Failure`.
    ///
    /// This is the boundary where a panic becomes a value: the panic payload
    /// is stored verbatim in the [`Thrown`] error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// assert_eq!(Outcome::challenge(|| 2 + 2).unwrap(), 4);
    ///
    /// let failed = Outcome::<i32, _>::challenge(|| panic!("x"));
    /// assert_eq!(failed.unwrap_err().message(), Some("x"));
    /// ```
    pub fn challenge<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(Thrown::from_panic(payload)),
        }
    }
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns `predicate(value)` for a success and `false` for a failure.
    #[inline]
    pub fn test<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `predicate(error)` for a failure and `false` for a success.
    #[inline]
    pub fn test_err<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    /// Returns an iterator yielding the success value, if any.
    ///
    /// A failure yields nothing. The iterator borrows the outcome, so it can
    /// be created any number of times.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: match self {
                Self::Success(value) => Some(value),
                Self::Failure(_) => None,
            },
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapError::UnwrapOnFailure`] if this is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!(
                "called `Outcome::unwrap()` on a `Failure` value: {}",
                UnwrapError::UnwrapOnFailure
            ),
        }
    }

    /// Returns the failure error, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapError::UnwrapErrOnSuccess`] if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use railway::control::Outcome;
    ///
    /// let _ = Outcome::<i32, String>::success(1).unwrap_err();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Success(_) => panic!(
                "called `Outcome::unwrap_err()` on a `Success` value: {}",
                UnwrapError::UnwrapErrOnSuccess
            ),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value or [`UnwrapError::UnwrapOnFailure`].
    ///
    /// # Errors
    ///
    /// Returns `Err(UnwrapError::UnwrapOnFailure)` for a `Failure`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(UnwrapError::UnwrapOnFailure),
        }
    }

    /// Returns the failure error or [`UnwrapError::UnwrapErrOnSuccess`].
    ///
    /// # Errors
    ///
    /// Returns `Err(UnwrapError::UnwrapErrOnSuccess)` for a `Success`.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError> {
        match self {
            Self::Success(_) => Err(UnwrapError::UnwrapErrOnSuccess),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the success value or `alternative`.
    #[inline]
    pub fn unwrap_or(self, alternative: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => alternative,
        }
    }

    /// Returns the success value or recovers one from the error.
    ///
    /// `function` is only invoked for a `Failure`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error),
        }
    }

    /// Eliminates the outcome by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("late".to_string());
    /// let text = outcome.fold(|value| value.to_string(), |error| format!("error: {error}"));
    /// assert_eq!(text, "error: late");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a success value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to a failure error.
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Chains a computation that may itself fail.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recovers from a failure with another computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let recovered: Outcome<i32, ()> =
    ///     Outcome::<i32, &str>::failure("missing").or_else(|_| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    /// Returns `other` for a success, otherwise keeps the failure.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Keeps a success, otherwise returns `other`.
    #[inline]
    pub fn or<G>(self, other: Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Like [`Outcome::and_then`], but a panic inside `function` becomes a
    /// `Failure` instead of unwinding.
    ///
    /// The error channel widens to the opaque [`Thrown`]: a panic payload, a
    /// failure returned by `function`, or the failure already held by `self`
    /// are all stored verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let parsed = Outcome::<&str, String>::success("12")
    ///     .attempt(|text| Outcome::success(text.parse::<i32>().unwrap()));
    /// assert_eq!(parsed.unwrap(), 12);
    ///
    /// let broken = Outcome::<&str, String>::success("x")
    ///     .attempt(|text| Outcome::<i32, String>::success(text.parse::<i32>().unwrap()));
    /// assert!(broken.unwrap_err().is_panic());
    ///
    /// let untouched = Outcome::<&str, String>::failure("early".to_string())
    ///     .attempt(|text| Outcome::<usize, String>::success(text.len()));
    /// assert_eq!(untouched.unwrap_err().downcast::<String>().unwrap(), "early");
    /// ```
    pub fn attempt<U, F>(self, function: F) -> Outcome<U, Thrown>
    where
        E: Any + Send,
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => {
                match panic::catch_unwind(AssertUnwindSafe(|| function(value))) {
                    Ok(outcome) => outcome.map_err(Thrown::new),
                    Err(payload) => Outcome::Failure(Thrown::from_panic(payload)),
                }
            }
            Self::Failure(error) => Outcome::Failure(Thrown::new(error)),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a [`Presence`], discarding the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Outcome, Presence};
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(1).to_presence(), Presence::Present(1));
    /// assert_eq!(Outcome::<i32, &str>::failure("e").to_presence(), Presence::Absent);
    /// ```
    #[inline]
    pub fn to_presence(self) -> Presence<T> {
        match self {
            Self::Success(value) => Presence::Present(value),
            Self::Failure(_) => Presence::Absent,
        }
    }

    /// Converts into a [`Presence`] of the error, discarding the value.
    #[inline]
    pub fn err(self) -> Presence<E> {
        match self {
            Self::Success(_) => Presence::Absent,
            Self::Failure(error) => Presence::Present(error),
        }
    }

    /// Converts into a standard-library `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` for a `Failure`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success value, or `T::default()` for a failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(|_| T::default())
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_result().ok(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<A, E, V: FromIterator<A>> FromIterator<Outcome<A, E>> for Outcome<V, E> {
    /// Collects success values, stopping at the first failure.
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iterable: I) -> Self {
        iterable
            .into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

// =============================================================================
// Asynchronous Variants
// =============================================================================

#[cfg(feature = "async")]
mod asynchronous {
    use std::any::Any;
    use std::future::IntoFuture;
    use std::panic::AssertUnwindSafe;

    use futures::future::{BoxFuture, FutureExt};

    use super::Outcome;
    use crate::control::Thrown;
    use crate::effect::AsyncOutcome;

    impl<T: Send + 'static, E: Send + 'static> Outcome<T, E> {
        /// Lifts into an already-settled [`AsyncOutcome`].
        #[inline]
        pub fn to_async(self) -> AsyncOutcome<T, E> {
            AsyncOutcome::from(self)
        }

        /// Like [`Outcome::map`], awaiting the result of `function`.
        ///
        /// A failure settles immediately without invoking `function`.
        pub fn map_async<U, F, Fut>(self, function: F) -> AsyncOutcome<U, E>
        where
            U: Send + 'static,
            F: FnOnce(T) -> Fut + Send + 'static,
            Fut: IntoFuture<Output = U>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Success(value) => AsyncOutcome::new(async move {
                    Outcome::Success(function(value).into_future().await)
                }),
                Self::Failure(error) => AsyncOutcome::failure(error),
            }
        }

        /// Like [`Outcome::map_err`], awaiting the result of `function`.
        pub fn map_err_async<G, F, Fut>(self, function: F) -> AsyncOutcome<T, G>
        where
            G: Send + 'static,
            F: FnOnce(E) -> Fut + Send + 'static,
            Fut: IntoFuture<Output = G>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Success(value) => AsyncOutcome::success(value),
                Self::Failure(error) => AsyncOutcome::new(async move {
                    Outcome::Failure(function(error).into_future().await)
                }),
            }
        }

        /// Like [`Outcome::and_then`], awaiting the outcome produced by
        /// `function`.
        pub fn and_then_async<U, F, Fut>(self, function: F) -> AsyncOutcome<U, E>
        where
            U: Send + 'static,
            F: FnOnce(T) -> Fut + Send + 'static,
            Fut: IntoFuture<Output = Outcome<U, E>>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Success(value) => {
                    AsyncOutcome::new(async move { function(value).into_future().await })
                }
                Self::Failure(error) => AsyncOutcome::failure(error),
            }
        }

        /// Like [`Outcome::or_else`], awaiting the recovery outcome.
        pub fn or_else_async<G, F, Fut>(self, function: F) -> AsyncOutcome<T, G>
        where
            G: Send + 'static,
            F: FnOnce(E) -> Fut + Send + 'static,
            Fut: IntoFuture<Output = Outcome<T, G>>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Success(value) => AsyncOutcome::success(value),
                Self::Failure(error) => {
                    AsyncOutcome::new(async move { function(error).into_future().await })
                }
            }
        }

        /// Like [`Outcome::test`], awaiting the verdict of `predicate`.
        pub fn test_async<P, Fut>(self, predicate: P) -> BoxFuture<'static, bool>
        where
            P: FnOnce(&T) -> Fut + Send + 'static,
            Fut: IntoFuture<Output = bool>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Success(value) => async move {
                    let verdict = predicate(&value).into_future();
                    verdict.await
                }
                .boxed(),
                Self::Failure(_) => futures::future::ready(false).boxed(),
            }
        }

        /// Like [`Outcome::attempt`], catching panics raised while calling
        /// `function` or polling the future it returns.
        pub fn attempt_async<U, F, Fut>(self, function: F) -> AsyncOutcome<U, Thrown>
        where
            E: Any,
            U: Send + 'static,
            F: FnOnce(T) -> Fut + Send + 'static,
            Fut: IntoFuture<Output = Outcome<U, E>>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Success(value) => AsyncOutcome::new(async move {
                    let guarded = AssertUnwindSafe(async move { function(value).into_future().await })
                        .catch_unwind()
                        .await;
                    match guarded {
                        Ok(outcome) => outcome.map_err(Thrown::new),
                        Err(payload) => Outcome::Failure(Thrown::from_panic(payload)),
                    }
                }),
                Self::Failure(error) => AsyncOutcome::failure(Thrown::new(error)),
            }
        }
    }
}
