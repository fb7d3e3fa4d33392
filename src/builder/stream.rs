//! Fragment-by-fragment error message builder.

use std::fmt::{self, Display, Write};

/// Accumulates heterogeneous fragments into a single error message.
///
/// Convert it into an [`ErrorValue`](crate::ErrorValue) or directly into a
/// failed [`Outcome`](crate::Outcome) once the message is complete.
///
/// # Example
///
/// ```rust
/// use outcome::builder::ErrorStream;
/// use outcome::Outcome;
///
/// let result: Outcome<i32> = ErrorStream::new().push("not found ").push(404).into();
/// assert!(result.is_failure());
/// assert_eq!(result.unwrap_error(), "not found 404");
/// ```
///
/// It also implements [`fmt::Write`], for fragments that need format
/// specifiers:
///
/// ```rust
/// use outcome::builder::ErrorStream;
/// use outcome::ErrorValue;
/// use std::fmt::Write;
///
/// let mut stream = ErrorStream::new().push("ratio ");
/// write!(stream, "{:.2}", 0.5).unwrap();
/// assert_eq!(ErrorValue::from(stream), "ratio 0.50");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorStream {
    buffer: String,
}

impl ErrorStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `fragment` in its natural textual form.
    #[must_use]
    pub fn push<D: Display>(mut self, fragment: D) -> Self {
        self.buffer.push_str(&fragment.to_string());
        self
    }

    /// The message composed so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the stream, returning the composed message.
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Write for ErrorStream {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl Display for ErrorStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
