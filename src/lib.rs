//! # railway
//!
//! Option/Result style containers with synchronous and asynchronous
//! combinators for railway-oriented programming.
//!
//! ## Overview
//!
//! - **Control**: [`Presence`](control::Presence) and
//!   [`Outcome`](control::Outcome), with panic capture into
//!   [`Thrown`](control::Thrown)
//! - **Effect**: [`AsyncPresence`](effect::AsyncPresence) and
//!   [`AsyncOutcome`](effect::AsyncOutcome), lazy futures carrying the same
//!   combinators
//! - **Type Classes**: Functor, Applicative, Monad, Alternative and Bifunctor
//!   instances for the containers
//!
//! Every container converts into every other one: `to_async` lifts a
//! synchronous value, `to_outcome` and `to_presence` cross between the two
//! shapes, and awaiting an async container yields its synchronous form.
//!
//! ## Feature Flags
//!
//! - `control`: synchronous containers
//! - `async`: asynchronous containers and the `_async` combinators
//! - `typeclass`: type class traits and instances
//! - `serde`: `Serialize`/`Deserialize` for the synchronous containers
//! - `tracing`: debug events when a panic is captured
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::prelude::*;
//!
//! let parsed: Outcome<i32, String> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//!
//! let doubled = parsed.map(|x| x * 2).to_presence();
//! assert_eq!(doubled, present(84));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "async")]
pub mod effect;

#[cfg(feature = "control")]
mod tracing_compat;
