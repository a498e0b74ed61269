//! Error types for accessing the wrong variant of a container.
//!
//! The partial accessors (`unwrap`, `unwrap_err`) panic when called on the
//! wrong variant. Their non-panicking counterparts (`try_unwrap`,
//! `try_unwrap_err`) return these errors instead.

/// Represents an attempt to read a payload that the container does not hold.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Presence, UnwrapError};
///
/// let empty: Presence<i32> = Presence::Absent;
/// assert_eq!(empty.try_unwrap(), Err(UnwrapError::EmptyAccess));
/// assert_eq!(
///     format!("{}", UnwrapError::EmptyAccess),
///     "attempted to access the value of an absent presence"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnwrapError {
    /// The value of an `Absent` presence was requested.
    EmptyAccess,
    /// The value of a `Failure` outcome was requested.
    UnwrapOnFailure,
    /// The error of a `Success` outcome was requested.
    UnwrapErrOnSuccess,
}

impl UnwrapError {
    /// Returns the name of the accessor that raised this error.
    #[inline]
    pub const fn accessor(self) -> &'static str {
        match self {
            Self::EmptyAccess => "Presence::unwrap",
            Self::UnwrapOnFailure => "Outcome::unwrap",
            Self::UnwrapErrOnSuccess => "Outcome::unwrap_err",
        }
    }
}

impl std::fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::EmptyAccess => "attempted to access the value of an absent presence",
            Self::UnwrapOnFailure => "attempted to access the value of a failed outcome",
            Self::UnwrapErrOnSuccess => "attempted to access the error of a successful outcome",
        };
        formatter.write_str(message)
    }
}

impl std::error::Error for UnwrapError {}
