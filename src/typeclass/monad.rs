//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Outcome, Presence};
//! use railway::typeclass::Monad;
//!
//! fn halve(value: i32) -> Presence<i32> {
//!     if value % 2 == 0 { Presence::present(value / 2) } else { Presence::absent() }
//! }
//!
//! assert_eq!(Presence::present(8).flat_map(halve).flat_map(halve), Presence::Present(2));
//! assert_eq!(Presence::present(6).flat_map(halve).flat_map(halve), Presence::Absent);
//!
//! let checked: Outcome<i32, &str> = Outcome::success(1).then(Outcome::failure("late"));
//! assert_eq!(checked, Outcome::Failure("late"));
//! ```

use super::applicative::Applicative;
use crate::control::{Outcome, Presence};

/// A type class for applicatives whose next step can depend on the current value.
pub trait Monad: Applicative {
    /// Feeds the contained value into `function` and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the current value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Presence<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Presence<B>
    where
        F: FnOnce(A) -> Presence<B>,
    {
        Presence::and_then(self, function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        Outcome::and_then(self, function)
    }
}
