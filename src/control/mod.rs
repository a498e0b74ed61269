//! Synchronous containers.
//!
//! - [`Presence`]: a value that is either `Present` or `Absent`
//! - [`Outcome`]: a computation that is either a `Success` or a `Failure`
//! - [`Thrown`]: the opaque error captured from a panic by
//!   [`Outcome::challenge`] and [`Outcome::attempt`]
//! - [`UnwrapError`]: the reason a partial accessor rejected a container
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{absent, failure, present, success, Outcome, Presence};
//!
//! let name: Presence<&str> = present("ada");
//! let missing: Presence<&str> = absent();
//! assert_eq!(name.or(missing), Presence::Present("ada"));
//!
//! let parsed: Outcome<i32, String> = success(2);
//! let rejected: Outcome<i32, String> = failure("no digits".to_string());
//! assert_eq!(parsed.or(rejected).unwrap(), 2);
//! ```
//!
//! ## Converting between containers
//!
//! ```rust
//! use railway::control::{Outcome, Presence};
//!
//! let round_trip = Presence::present(7).to_outcome(|| "E").to_presence();
//! assert_eq!(round_trip.unwrap(), 7);
//!
//! let missing: Outcome<i32, &str> = Presence::absent().to_outcome(|| "E");
//! assert_eq!(missing.unwrap_err(), "E");
//! ```

mod error;
mod iter;
mod outcome;
mod presence;
mod thrown;

pub use error::UnwrapError;
pub use iter::{IntoIter, Iter};
pub use outcome::Outcome;
pub use presence::Presence;
pub use thrown::Thrown;

/// Creates a `Present` value.
#[inline]
pub const fn present<T>(value: T) -> Presence<T> {
    Presence::Present(value)
}

/// Returns the canonical `Absent` value for `T`.
#[inline]
pub const fn absent<T>() -> Presence<T> {
    Presence::Absent
}

/// Creates a `Success` outcome.
#[inline]
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Creates a `Failure` outcome.
#[inline]
pub const fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}
