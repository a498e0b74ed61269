//! Applicative type class - combining independent computations.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Outcome, Presence};
//! use railway::typeclass::Applicative;
//!
//! let sum = Presence::present(1).map2(Presence::present(2), |a, b| a + b);
//! assert_eq!(sum, Presence::Present(3));
//!
//! let left: Outcome<i32, &str> = Outcome::failure("left");
//! let right: Outcome<i32, &str> = Outcome::failure("right");
//! assert_eq!(left.map2(right, |a, b| a + b), Outcome::Failure("left"));
//! ```

use super::functor::Functor;
use crate::control::{Outcome, Presence};

/// A type class for functors that can lift values and combine containers.
pub trait Applicative: Functor {
    /// Lifts a plain value into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three containers with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the contents of two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Applies a contained function to a contained value.
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

// =============================================================================
// Presence<A> Implementation
// =============================================================================

impl<A> Applicative for Presence<A> {
    #[inline]
    fn pure<B>(value: B) -> Presence<B> {
        Presence::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Presence<B>, function: F) -> Presence<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Presence<B>, third: Presence<C>, function: F) -> Presence<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Presence::Present(b), Presence::Present(c)) => {
                Presence::Present(function(a, b, c))
            }
            _ => Presence::Absent,
        }
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    /// The leftmost failure wins.
    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (Self::Success(_), Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Success(a), Outcome::Success(b), Outcome::Success(c)) => {
                Outcome::Success(function(a, b, c))
            }
            (Self::Failure(error), _, _)
            | (Self::Success(_), Outcome::Failure(error), _)
            | (Self::Success(_), Outcome::Success(_), Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }
}
