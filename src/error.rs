//! Error types for rendering and serde conversion.
//!
//! Building a value tree cannot fail: key uniqueness, ownership and the closed
//! variant set are enforced by the API itself. Errors only arise when a sink
//! rejects a write during rendering, or when [`to_value`](crate::to_value) is
//! given data that has no value variant.
//!
//! # Example
//!
//! ```
//! use std::io::{self, Write};
//! use valtree::{Error, IntValue, Value};
//!
//! struct Closed;
//!
//! impl Write for Closed {
//!     fn write(&mut self, _: &[u8]) -> io::Result<usize> {
//!         Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
//!     }
//!
//!     fn flush(&mut self) -> io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let value = Value::from(IntValue::new(7));
//! match value.write_to_writer(Closed) {
//!     Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use std::fmt::{self, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors of this crate.
#[derive(Debug)]
pub enum Error {
    /// A custom message raised through serde.
    Message(String),

    /// The sink failed while a value was being rendered.
    ///
    /// The render is aborted at the failing write and not retried. Whatever
    /// was written before the failure stays in the sink.
    Io(std::io::Error),

    /// A serialized map key was not a string.
    ///
    /// Struct keys are [`Text`](crate::Text); any other key kind is rejected
    /// rather than stringified.
    KeyMustBeString,

    /// A serialized integer does not fit the 32-bit signed `Int` variant.
    IntOutOfRange,

    /// The serialized data kind has no corresponding value variant.
    Unsupported(&'static str),
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Message(message) => formatter.write_str(message),
            Error::Io(error) => write!(formatter, "sink write failed: {error}"),
            Error::KeyMustBeString => formatter.write_str("map key must be a string"),
            Error::IntOutOfRange => formatter.write_str("integer does not fit in i32"),
            Error::Unsupported(kind) => write!(formatter, "unsupported data kind: {kind}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(error) => Some(error),
            _ => None,
        }
    }
}
