//! Streamed construction of error messages.
//!
//! Failure sites often need to compose a message out of several values.
//! [`ErrorStream`] appends fragments in order using each fragment's
//! [`Display`](std::fmt::Display) form, and the [`err!`](crate::err) macro
//! does the same in one expression.

pub mod macros;
pub mod stream;

pub use stream::ErrorStream;
