//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Presence<_>`
//! directly. [`TypeConstructor`] uses a generic associated type to name "the
//! same container holding a different type", which is what `Functor`,
//! `Applicative` and `Monad` need to describe their results.
//!
//! # Example
//!
//! ```rust
//! use railway::control::Presence;
//! use railway::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Presence<String> = emptied(Presence::present(42));
//! assert_eq!(emptied, Presence::Absent);
//! ```

use crate::control::{Outcome, Presence};

/// A type constructor applied to some type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Presence<A> {
    type Inner = A;
    type WithType<B> = Presence<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}
