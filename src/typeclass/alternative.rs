//! Alternative type class - choice between computations.
//!
//! # Laws
//!
//! ```text
//! empty().alt(x) == x
//! x.alt(empty()) == x
//! x.alt(y).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Presence;
//! use railway::typeclass::Alternative;
//!
//! let first = Presence::choice([Presence::absent(), Presence::present(2), Presence::present(3)]);
//! assert_eq!(first, Presence::Present(2));
//! ```

use super::applicative::Applicative;
use crate::control::Presence;

/// A type class for applicatives with an empty element and a choice operator.
pub trait Alternative: Applicative {
    /// The identity element for [`alt`](Alternative::alt).
    fn empty<B>() -> Self::WithType<B>;

    /// Returns `self` when it holds a value, otherwise `alternative`.
    fn alt(self, alternative: Self) -> Self;

    /// Returns the first alternative holding a value.
    fn choice<I>(alternatives: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>;

    /// Keeps the value only when `condition` holds.
    #[inline]
    fn guard(condition: bool) -> Self::WithType<()> {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }
}

impl<A> Alternative for Presence<A> {
    #[inline]
    fn empty<B>() -> Presence<B> {
        Presence::Absent
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(Presence::is_present)
            .unwrap_or(Presence::Absent)
    }
}
