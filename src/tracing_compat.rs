//! Optional structured logging.
//!
//! With the `tracing` feature enabled the macros are re-exported from the
//! `tracing` crate. Without it they expand to nothing.

#[cfg(feature = "tracing")]
pub(crate) use tracing::debug;

#[cfg(not(feature = "tracing"))]
mod noop {
    /// No-op debug-level logging macro.
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    pub(crate) use debug;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::debug;
