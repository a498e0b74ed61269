//! Bifunctor type class - mapping over two type parameters.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! bf.bimap(f, g) == bf.first(f).second(g)
//! ```
//!
//! # Type Parameter Order
//!
//! `Outcome<T, E>` is implemented as `Bifunctor<E, T>`, so `first` maps the
//! failure and `second` maps the success, matching `Functor::fmap`.
//!
//! ```rust
//! use railway::control::Outcome;
//! use railway::typeclass::{Bifunctor, Functor};
//!
//! let parsed: Outcome<i32, String> = Outcome::success(21);
//! assert_eq!(parsed.clone().second(|x| x * 2), parsed.fmap(|x| x * 2));
//!
//! let failed: Outcome<i32, String> = Outcome::failure("oops".to_string());
//! assert_eq!(failed.first(|e| e.len()), Outcome::Failure(4));
//! ```

use crate::control::Outcome;

/// A type class for types with two type parameters that can both be mapped.
pub trait Bifunctor<A, B> {
    /// The same shape holding `C` and `D`.
    type Target<C, D>;

    /// Maps both parameters at once.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps only the first parameter.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        Self: Sized,
        F: FnOnce(A) -> C,
    {
        self.bimap(function, |value| value)
    }

    /// Maps only the second parameter.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        Self: Sized,
        G: FnOnce(B) -> D,
    {
        self.bimap(|value| value, function)
    }

    /// Maps both parameters by reference.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }
}
