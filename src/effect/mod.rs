//! Asynchronous containers.
//!
//! - [`AsyncPresence`]: a pending computation yielding a
//!   [`Presence`](crate::control::Presence)
//! - [`AsyncOutcome`]: a pending computation yielding an
//!   [`Outcome`](crate::control::Outcome)
//!
//! Both wrap a single boxed future, implement [`Future`](std::future::Future)
//! and are consumed by awaiting them. Each combinator builds a continuation
//! that only starts once the previous stage has settled, so one chain never
//! runs two stages at the same time. There is no cancellation: a chain that
//! is awaited runs to completion.
//!
//! # Lifting and Converting
//!
//! ```rust
//! use railway::control::{Outcome, Presence};
//! use railway::effect::{AsyncOutcome, AsyncPresence};
//!
//! futures::executor::block_on(async {
//!     let lifted: AsyncPresence<i32> = Presence::present(3).to_async();
//!     let outcome: AsyncOutcome<i32, &str> = lifted.to_outcome(|| "missing");
//!     assert_eq!(outcome.await, Outcome::Success(3));
//!
//!     let discarded = AsyncOutcome::<i32, &str>::failure("e").to_presence();
//!     assert_eq!(discarded.await, Presence::Absent);
//! });
//! ```

mod async_outcome;
mod async_presence;

pub use async_outcome::AsyncOutcome;
pub use async_presence::AsyncPresence;

static_assertions::assert_impl_all!(AsyncPresence<i32>: Send, Unpin, std::future::Future);
static_assertions::assert_impl_all!(AsyncOutcome<i32, String>: Send, Unpin, std::future::Future);
static_assertions::assert_impl_all!(crate::control::Thrown: Send, std::error::Error);
static_assertions::assert_not_impl_any!(crate::control::Thrown: Sync);
