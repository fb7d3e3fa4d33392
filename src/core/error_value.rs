//! The immutable failure payload carried by a failed outcome.

use crate::builder::ErrorStream;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Human-readable description of a domain failure.
///
/// An `ErrorValue` is created once at the failure site and only ever cloned
/// afterwards; there is no way to change its text. Equality is exact text
/// equality, against other error values as well as plain strings.
///
/// # Example
///
/// ```rust
/// use outcome::{err, ErrorValue};
///
/// let plain = ErrorValue::new("unknown error");
/// assert_eq!(plain, "unknown error");
///
/// let composed = err!("not found ", 404);
/// assert_eq!(composed, "not found 404");
/// assert_eq!(composed.message(), "not found 404");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{message}")]
#[serde(transparent)]
pub struct ErrorValue {
    message: String,
}

impl ErrorValue {
    /// Create an error value holding an owned copy of `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error value, returning its text.
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Shorthand for [`ErrorValue::new`].
pub fn err(message: impl Into<String>) -> ErrorValue {
    ErrorValue::new(message)
}

impl From<String> for ErrorValue {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ErrorValue {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<ErrorStream> for ErrorValue {
    fn from(stream: ErrorStream) -> Self {
        Self::new(stream.into_string())
    }
}

impl AsRef<str> for ErrorValue {
    fn as_ref(&self) -> &str {
        &self.message
    }
}

impl PartialEq<str> for ErrorValue {
    fn eq(&self, other: &str) -> bool {
        self.message == other
    }
}

impl PartialEq<&str> for ErrorValue {
    fn eq(&self, other: &&str) -> bool {
        self.message == *other
    }
}

impl PartialEq<String> for ErrorValue {
    fn eq(&self, other: &String) -> bool {
        &self.message == other
    }
}

impl PartialEq<ErrorValue> for str {
    fn eq(&self, other: &ErrorValue) -> bool {
        self == other.message
    }
}

impl PartialEq<ErrorValue> for &str {
    fn eq(&self, other: &ErrorValue) -> bool {
        *self == other.message
    }
}

impl PartialEq<ErrorValue> for String {
    fn eq(&self, other: &ErrorValue) -> bool {
        *self == other.message
    }
}
