//! Type class traits for the railway containers.
//!
//! - [`Functor`]: mapping over the contained value
//! - [`Applicative`]: lifting values and combining independent containers
//! - [`Monad`]: sequencing computations that depend on earlier results
//! - [`Alternative`]: choosing the first container that holds a value
//! - [`Bifunctor`]: mapping both sides of an [`Outcome`](crate::control::Outcome)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses a
//! generic associated type to describe "the same container over another
//! type", which the other traits use for their return types.
//!
//! Both `Presence` and `Outcome` have inherent methods named `map` and
//! `and_then`; those take precedence over trait methods with the same name,
//! so generic code should call [`Functor::fmap`] and [`Monad::flat_map`].
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Outcome, Presence};
//! use railway::typeclass::{Applicative, Functor, Monad};
//!
//! fn increment_all<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|x| x + 1)
//! }
//!
//! assert_eq!(increment_all(Presence::present(1)), Presence::Present(2));
//! assert_eq!(increment_all(Outcome::<i32, ()>::success(1)), Outcome::Success(2));
//!
//! let chained = <Presence<()>>::pure(3).flat_map(|x| Presence::present(x * x));
//! assert_eq!(chained, Presence::Present(9));
//! ```

mod alternative;
mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
