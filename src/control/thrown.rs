//! Opaque error payload captured at the panic boundary.
//!
//! `Outcome::challenge`, `Outcome::attempt` and the asynchronous `try_async`
//! family are the only places where a panic is turned into a value. The
//! captured payload is stored verbatim in a [`Thrown`], whose contents are
//! deliberately untyped: callers inspect it with [`Thrown::message`] or
//! recover the original value with [`Thrown::downcast`].
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Outcome, Thrown};
//!
//! let outcome: Outcome<i32, Thrown> = Outcome::challenge(|| panic!("boom"));
//! let thrown = outcome.unwrap_err();
//! assert!(thrown.is_panic());
//! assert_eq!(thrown.message(), Some("boom"));
//! ```

use std::any::Any;
use std::fmt;

use crate::tracing_compat::debug;

/// An opaque value captured from a panic or boxed from a typed error.
///
/// `Thrown` is `Send` but not `Sync`, because a panic payload is only
/// guaranteed to be `Send`. It therefore does not convert into
/// `Box<dyn Error + Send + Sync>`. Callers that need such an error can map it
/// first, for example with `thrown.to_string()`.
pub struct Thrown {
    payload: Box<dyn Any + Send>,
    panicked: bool,
}

impl Thrown {
    /// Boxes an arbitrary value as a thrown payload.
    ///
    /// A value that already is a `Thrown` is returned unchanged rather than
    /// boxed a second time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Thrown;
    ///
    /// let thrown = Thrown::new(404_u16);
    /// assert!(!thrown.is_panic());
    /// assert_eq!(thrown.downcast_ref::<u16>(), Some(&404));
    ///
    /// let again = Thrown::new(thrown);
    /// assert_eq!(again.downcast_ref::<u16>(), Some(&404));
    /// ```
    pub fn new<V: Any + Send>(value: V) -> Self {
        let payload: Box<dyn Any + Send> = Box::new(value);
        match payload.downcast::<Self>() {
            Ok(thrown) => *thrown,
            Err(payload) => Self {
                payload,
                panicked: false,
            },
        }
    }

    /// Wraps the payload of a caught panic.
    ///
    /// This is the payload type returned by `std::panic::catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let thrown = Self {
            payload,
            panicked: true,
        };
        debug!(
            payload = thrown.message().unwrap_or("<opaque payload>"),
            "captured panic as failure"
        );
        thrown
    }

    /// Returns `true` if the payload came from a panic.
    #[inline]
    pub const fn is_panic(&self) -> bool {
        self.panicked
    }

    /// Returns the payload as text when it is a `&'static str` or a `String`.
    ///
    /// Panics raised through `panic!` with a message carry one of these two
    /// payload types.
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            return Some(*message);
        }
        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    /// Returns a reference to the payload if it has type `V`.
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.payload.downcast_ref::<V>()
    }

    /// Recovers the payload if it has type `V`, otherwise returns `self`.
    ///
    /// # Errors
    ///
    /// Returns the unchanged `Thrown` when the payload is not a `V`.
    pub fn downcast<V: Any>(self) -> Result<V, Self> {
        let panicked = self.panicked;
        self.payload
            .downcast::<V>()
            .map(|value| *value)
            .map_err(|payload| Self { payload, panicked })
    }

    /// Returns the boxed payload, for example to resume a caught panic.
    pub fn into_inner(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Thrown")
            .field("message", &self.message())
            .field("panicked", &self.panicked)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.message(), self.panicked) {
            (Some(message), _) => formatter.write_str(message),
            (None, true) => formatter.write_str("panic with an opaque payload"),
            (None, false) => formatter.write_str("opaque thrown value"),
        }
    }
}

impl std::error::Error for Thrown {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn message_reads_static_str_payload() {
        let thrown = Thrown::from_panic(Box::new("static"));
        assert_eq!(thrown.message(), Some("static"));
        assert!(thrown.is_panic());
    }

    #[rstest]
    fn message_reads_string_payload() {
        let thrown = Thrown::new(String::from("owned"));
        assert_eq!(thrown.message(), Some("owned"));
        assert_eq!(thrown.to_string(), "owned");
    }

    #[rstest]
    fn message_is_none_for_other_payloads() {
        let thrown = Thrown::new(7_i64);
        assert_eq!(thrown.message(), None);
        assert_eq!(thrown.to_string(), "opaque thrown value");
    }

    #[rstest]
    fn downcast_recovers_original_value() {
        let thrown = Thrown::new(vec![1, 2, 3]);
        assert_eq!(thrown.downcast::<Vec<i32>>().ok(), Some(vec![1, 2, 3]));
    }

    #[rstest]
    fn downcast_to_wrong_type_keeps_payload() {
        let thrown = Thrown::from_panic(Box::new(42_u8));
        let thrown = thrown.downcast::<String>().unwrap_err();
        assert!(thrown.is_panic());
        assert_eq!(thrown.downcast_ref::<u8>(), Some(&42));
    }

    #[cfg(feature = "tracing")]
    mod logging {
        use std::fmt;
        use std::sync::{Arc, Mutex};

        use rstest::rstest;
        use tracing::field::{Field, Visit};
        use tracing::span::{Attributes, Id, Record};
        use tracing::{Event, Metadata, Subscriber};

        use crate::control::Thrown;

        #[derive(Clone, Default)]
        struct FieldRecorder {
            fields: Arc<Mutex<Vec<(String, String)>>>,
        }

        struct FieldVisitor<'a>(&'a mut Vec<(String, String)>);

        impl Visit for FieldVisitor<'_> {
            fn record_str(&mut self, field: &Field, value: &str) {
                self.0.push((field.name().to_string(), value.to_string()));
            }

            fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                self.0.push((field.name().to_string(), format!("{value:?}")));
            }
        }

        impl Subscriber for FieldRecorder {
            fn enabled(&self, _: &Metadata<'_>) -> bool {
                true
            }

            fn new_span(&self, _: &Attributes<'_>) -> Id {
                Id::from_u64(1)
            }

            fn record(&self, _: &Id, _: &Record<'_>) {}

            fn record_follows_from(&self, _: &Id, _: &Id) {}

            fn event(&self, event: &Event<'_>) {
                let mut fields = self.fields.lock().unwrap();
                event.record(&mut FieldVisitor(&mut *fields));
            }

            fn enter(&self, _: &Id) {}

            fn exit(&self, _: &Id) {}
        }

        #[rstest]
        fn capture_event_keeps_payload_apart_from_message() {
            let recorder = FieldRecorder::default();
            let fields = Arc::clone(&recorder.fields);

            tracing::subscriber::with_default(recorder, || {
                let _ = Thrown::from_panic(Box::new("boom"));
            });

            let fields = fields.lock().unwrap();
            let value_of = |name: &str| {
                fields
                    .iter()
                    .filter(|(field, _)| field == name)
                    .map(|(_, value)| value.as_str())
                    .collect::<Vec<_>>()
            };
            assert_eq!(value_of("message"), vec!["captured panic as failure"]);
            assert_eq!(value_of("payload"), vec!["boom"]);
        }
    }
}
