//! Core value-or-error types.
//!
//! - [`ErrorValue`]: the immutable failure payload
//! - [`Outcome`]: the success-or-failure container and its conversions
//! - [`Cast`]: explicit value casts used when converting outcomes
//! - [`InvalidStateError`]: the fault raised when the wrong variant is
//!   unwrapped

mod cast;
mod error_value;
mod fault;
mod outcome;

pub use cast::Cast;
pub use error_value::{err, ErrorValue};
pub use fault::InvalidStateError;
pub use outcome::{Outcome, UnitOutcome, UNINITIALIZED_MESSAGE};
