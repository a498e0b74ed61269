//! Presence type - a value that may or may not exist.
//!
//! This module provides the `Presence<T>` type, which is either
//! `Present(T)` or `Absent`. Chains of combinators replace manual checks for
//! a missing value: every combinator returns a new container and `Absent`
//! short-circuits the rest of the chain.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Presence;
//!
//! let doubled = Presence::present(5).map(|value| value * 2);
//! assert_eq!(doubled.unwrap(), 10);
//!
//! let missing: Presence<i32> = Presence::absent();
//! assert_eq!(missing.map(|value| value * 2).unwrap_or(7), 7);
//! ```

use std::fmt;

use super::error::UnwrapError;
use super::iter::{IntoIter, Iter};
use super::outcome::Outcome;

/// A value that is either present or absent.
///
/// `Absent` carries no payload, so every `Absent` of a given `T` compares
/// equal to every other one. Any value, including a zero, an empty string or
/// a nested `Absent`, is a valid `Present` payload.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use railway::control::Presence;
///
/// let value = Presence::present(2).zip_with(Presence::present(3), |a, b| a + b);
/// assert_eq!(value, Presence::Present(5));
///
/// let value = Presence::present(2).zip_with(Presence::<i32>::absent(), |a, b| a + b);
/// assert_eq!(value, Presence::Absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Presence<T> {
    /// No value.
    Absent,
    /// Exactly one value.
    Present(T),
}

// =============================================================================
// Construction
// =============================================================================

impl<T> Presence<T> {
    /// Wraps a value. Always succeeds.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns the canonical `Absent` value for `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    ///
    /// const NOTHING: Presence<u8> = Presence::absent();
    /// assert_eq!(NOTHING, Presence::<u8>::absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }
}

impl<T> Presence<T> {
    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Converts from `&Presence<T>` to `Presence<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Presence<&T> {
        match self {
            Self::Present(value) => Presence::Present(value),
            Self::Absent => Presence::Absent,
        }
    }

    /// Converts from `&mut Presence<T>` to `Presence<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Presence<&mut T> {
        match self {
            Self::Present(value) => Presence::Present(value),
            Self::Absent => Presence::Absent,
        }
    }

    /// Returns `pred(value)` for a present value and `false` for `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    ///
    /// assert!(Presence::present(4).test(|value| value % 2 == 0));
    /// assert!(!Presence::<i32>::absent().test(|_| true));
    /// ```
    #[inline]
    pub fn test<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    /// Returns an iterator over the held value.
    ///
    /// The iterator yields one item for `Present` and none for `Absent`.
    /// It borrows the container, so it can be created any number of times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    ///
    /// let value = Presence::present(3);
    /// assert_eq!(value.iter().count(), 1);
    /// assert_eq!(value.iter().next(), Some(&3));
    /// assert_eq!(Presence::<i32>::absent().iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: match self {
                Self::Present(value) => Some(value),
                Self::Absent => None,
            },
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the held value, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapError::EmptyAccess`] if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    ///
    /// assert_eq!(Presence::present("air").unwrap(), "air");
    /// ```
    ///
    /// ```rust,should_panic
    /// use railway::control::Presence;
    ///
    /// let _ = Presence::<i32>::absent().unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!(
                "called `Presence::unwrap()` on an `Absent` value: {}",
                UnwrapError::EmptyAccess
            ),
        }
    }

    /// Returns the held value or [`UnwrapError::EmptyAccess`].
    ///
    /// # Errors
    ///
    /// Returns `Err(UnwrapError::EmptyAccess)` if this is `Absent`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(UnwrapError::EmptyAccess),
        }
    }

    /// Returns the held value or `alternative`.
    #[inline]
    pub fn unwrap_or(self, alternative: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => alternative,
        }
    }

    /// Returns the held value or computes one from `function`.
    ///
    /// `function` is only invoked for `Absent`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    /// Eliminates the container by applying exactly one of two functions.
    ///
    /// Both handlers must be supplied; there is no partial form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    ///
    /// let describe = |presence: Presence<i32>| {
    ///     presence.fold(|value| format!("got {value}"), || "nothing".to_string())
    /// };
    /// assert_eq!(describe(Presence::present(1)), "got 1");
    /// assert_eq!(describe(Presence::absent()), "nothing");
    /// ```
    #[inline]
    pub fn fold<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    ///
    /// assert_eq!(Presence::present(5).map(|v| v * 2), Presence::Present(10));
    /// assert_eq!(Presence::<i32>::absent().map(|v| v * 2), Presence::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Presence<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Presence::Present(function(value)),
            Self::Absent => Presence::Absent,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    ///
    /// let half = |value: i32| {
    ///     if value % 2 == 0 { Presence::present(value / 2) } else { Presence::absent() }
    /// };
    /// assert_eq!(Presence::present(8).and_then(half), Presence::Present(4));
    /// assert_eq!(Presence::present(7).and_then(half), Presence::Absent);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Presence<U>
    where
        F: FnOnce(T) -> Presence<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Presence::Absent,
        }
    }

    /// Keeps a present value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Fills an `Absent` container with `value`; a present value is kept.
    #[inline]
    pub fn insert(self, value: T) -> Self {
        match self {
            Self::Present(existing) => Self::Present(existing),
            Self::Absent => Self::Present(value),
        }
    }

    /// Fills an `Absent` container with the result of `function`.
    #[inline]
    pub fn insert_with<F>(self, function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(existing) => Self::Present(existing),
            Self::Absent => Self::Present(function()),
        }
    }

    // =========================================================================
    // Boolean-like Combination
    // =========================================================================

    /// Returns `other` if this is present, otherwise `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    ///
    /// assert_eq!(Presence::present(1).and(Presence::present("x")), Presence::Present("x"));
    /// assert_eq!(Presence::<i32>::absent().and(Presence::present("x")), Presence::Absent);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Presence<U>) -> Presence<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Presence::Absent,
        }
    }

    /// Returns `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => other,
        }
    }

    /// Returns whichever side is present when exactly one of them is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    ///
    /// assert_eq!(Presence::present(1).xor(Presence::absent()), Presence::Present(1));
    /// assert_eq!(Presence::absent().xor(Presence::present(2)), Presence::Present(2));
    /// assert_eq!(Presence::present(1).xor(Presence::present(2)), Presence::Absent);
    /// assert_eq!(Presence::<i32>::absent().xor(Presence::absent()), Presence::Absent);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Absent) => Self::Present(value),
            (Self::Absent, other) => other,
            (Self::Present(_), Self::Present(_)) => Self::Absent,
        }
    }

    /// Returns `self` if present, otherwise the result of `function`.
    ///
    /// `function` is only invoked for `Absent`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => function(),
        }
    }

    /// Pairs two present values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    ///
    /// assert_eq!(Presence::present(2).zip(Presence::present(3)).unwrap(), (2, 3));
    /// assert_eq!(Presence::present(2).zip(Presence::<i32>::absent()), Presence::Absent);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Presence<U>) -> Presence<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two present values with `function`.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Presence<U>, function: F) -> Presence<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Present(left), Presence::Present(right)) => {
                Presence::Present(function(left, right))
            }
            _ => Presence::Absent,
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into an [`Outcome`], producing the error with `error_function`
    /// when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Outcome, Presence};
    ///
    /// assert_eq!(Presence::present(1).to_outcome(|| "E"), Outcome::Success(1));
    /// assert_eq!(Presence::<i32>::absent().to_outcome(|| "E").unwrap_err(), "E");
    /// ```
    #[inline]
    pub fn to_outcome<E, F>(self, error_function: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error_function()),
        }
    }

    /// Converts into a standard-library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T: Default> Presence<T> {
    /// Returns the held value, or `T::default()` for `Absent`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(T::default)
    }
}

impl<T> Presence<Presence<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Presence<T> {
        self.and_then(|inner| inner)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Presence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<T> Default for Presence<T> {
    /// Returns `Absent`.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Presence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Presence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<A, V: FromIterator<A>> FromIterator<Presence<A>> for Presence<V> {
    /// Collects present values, returning `Absent` at the first `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Presence;
    ///
    /// let all: Presence<Vec<i32>> = vec![Presence::present(1), Presence::present(2)]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(all, Presence::Present(vec![1, 2]));
    ///
    /// let gap: Presence<Vec<i32>> = vec![Presence::present(1), Presence::absent()]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(gap, Presence::Absent);
    /// ```
    fn from_iter<I: IntoIterator<Item = Presence<A>>>(iterable: I) -> Self {
        iterable
            .into_iter()
            .map(Presence::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Presence<T> {
    /// `Some(v)` becomes `Present(v)` and `None` becomes `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Presence<T>> for Option<T> {
    #[inline]
    fn from(presence: Presence<T>) -> Self {
        presence.into_option()
    }
}

// =============================================================================
// Asynchronous Variants
// =============================================================================

#[cfg(feature = "async")]
mod asynchronous {
    use std::future::IntoFuture;

    use futures::future::{BoxFuture, FutureExt};

    use super::Presence;
    use crate::control::Outcome;
    use crate::effect::{AsyncOutcome, AsyncPresence};

    impl<T: Send + 'static> Presence<T> {
        /// Lifts into an already-settled [`AsyncPresence`].
        #[inline]
        pub fn to_async(self) -> AsyncPresence<T> {
            AsyncPresence::from(self)
        }

        /// Like [`Presence::map`], awaiting the result of `function`.
        ///
        /// `Absent` settles immediately without invoking `function`.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use railway::control::Presence;
        ///
        /// futures::executor::block_on(async {
        ///     let value = Presence::present(5).map_async(|v| async move { v + 1 }).await;
        ///     assert_eq!(value, Presence::Present(6));
        /// });
        /// ```
        pub fn map_async<U, F, Fut>(self, function: F) -> AsyncPresence<U>
        where
            U: Send + 'static,
            F: FnOnce(T) -> Fut + Send + 'static,
            Fut: IntoFuture<Output = U>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Present(value) => AsyncPresence::new(async move {
                    Presence::Present(function(value).into_future().await)
                }),
                Self::Absent => AsyncPresence::absent(),
            }
        }

        /// Like [`Presence::and_then`], awaiting the container produced by
        /// `function`.
        pub fn and_then_async<U, F, Fut>(self, function: F) -> AsyncPresence<U>
        where
            U: Send + 'static,
            F: FnOnce(T) -> Fut + Send + 'static,
            Fut: IntoFuture<Output = Presence<U>>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Present(value) => {
                    AsyncPresence::new(async move { function(value).into_future().await })
                }
                Self::Absent => AsyncPresence::absent(),
            }
        }

        /// Like [`Presence::filter`], awaiting the verdict of `predicate`.
        pub fn filter_async<P, Fut>(self, predicate: P) -> AsyncPresence<T>
        where
            P: FnOnce(&T) -> Fut + Send + 'static,
            Fut: IntoFuture<Output = bool>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Present(value) => AsyncPresence::new(async move {
                    let verdict = predicate(&value).into_future();
                    if verdict.await {
                        Presence::Present(value)
                    } else {
                        Presence::Absent
                    }
                }),
                Self::Absent => AsyncPresence::absent(),
            }
        }

        /// Like [`Presence::insert_with`], awaiting the value from `function`.
        pub fn insert_with_async<F, Fut>(self, function: F) -> AsyncPresence<T>
        where
            F: FnOnce() -> Fut + Send + 'static,
            Fut: IntoFuture<Output = T>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Present(value) => AsyncPresence::present(value),
                Self::Absent => AsyncPresence::new(async move {
                    Presence::Present(function().into_future().await)
                }),
            }
        }

        /// Like [`Presence::or_else`], awaiting the fallback container.
        pub fn or_else_async<F, Fut>(self, function: F) -> AsyncPresence<T>
        where
            F: FnOnce() -> Fut + Send + 'static,
            Fut: IntoFuture<Output = Self>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Present(value) => AsyncPresence::present(value),
                Self::Absent => AsyncPresence::new(async move { function().into_future().await }),
            }
        }

        /// Like [`Presence::zip_with`], awaiting the combined value.
        pub fn zip_with_async<U, R, F, Fut>(self, other: Presence<U>, function: F) -> AsyncPresence<R>
        where
            R: Send + 'static,
            U: Send + 'static,
            F: FnOnce(T, U) -> Fut + Send + 'static,
            Fut: IntoFuture<Output = R>,
            Fut::IntoFuture: Send + 'static,
        {
            match (self, other) {
                (Self::Present(left), Presence::Present(right)) => AsyncPresence::new(async move {
                    Presence::Present(function(left, right).into_future().await)
                }),
                _ => AsyncPresence::absent(),
            }
        }

        /// Like [`Presence::test`], awaiting the verdict of `predicate`.
        pub fn test_async<P, Fut>(self, predicate: P) -> BoxFuture<'static, bool>
        where
            P: FnOnce(&T) -> Fut + Send + 'static,
            Fut: IntoFuture<Output = bool>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Present(value) => async move {
                    let verdict = predicate(&value).into_future();
                    verdict.await
                }
                .boxed(),
                Self::Absent => futures::future::ready(false).boxed(),
            }
        }

        /// Like [`Presence::to_outcome`], awaiting the error from
        /// `error_function`.
        pub fn to_outcome_async<E, F, Fut>(self, error_function: F) -> AsyncOutcome<T, E>
        where
            E: Send + 'static,
            F: FnOnce() -> Fut + Send + 'static,
            Fut: IntoFuture<Output = E>,
            Fut::IntoFuture: Send + 'static,
        {
            match self {
                Self::Present(value) => AsyncOutcome::success(value),
                Self::Absent => AsyncOutcome::new(async move {
                    Outcome::Failure(error_function().into_future().await)
                }),
            }
        }
    }
}
