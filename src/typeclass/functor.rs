//! Functor type class - mapping over a container.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Outcome, Presence};
//! use railway::typeclass::Functor;
//!
//! assert_eq!(Presence::present(2).fmap(|x| x * 10), Presence::Present(20));
//! assert_eq!(Presence::<i32>::absent().fmap(|x| x * 10), Presence::Absent);
//!
//! let failed: Outcome<i32, &str> = Outcome::failure("boom");
//! assert_eq!(failed.fmap(|x| x + 1), Outcome::Failure("boom"));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Outcome, Presence};

/// A type class for containers whose contents can be transformed.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value, keeping the shape.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the contained value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the contained value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the contained value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Presence<A> Implementation
// =============================================================================

impl<A> Functor for Presence<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Presence<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Presence<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}
