//! Outcome: a value-or-error container
//!
//! An [`Outcome<T>`] holds either a success value of type `T` or an
//! [`ErrorValue`] describing what went wrong. Domain failures travel by value
//! through return types; only misuse of the container itself (unwrapping the
//! variant that is not there) panics, with an [`InvalidStateError`] message.
//!
//! # Core Concepts
//!
//! - **ErrorValue**: immutable error text, compared by exact content
//! - **ErrorStream** / [`err!`]: compose a message from several fragments
//! - **Outcome**: `Success(T)` or `Failure(ErrorValue)`, failure by default
//! - **Cast**: explicit conversions between outcomes of different types
//!
//! # Example
//!
//! ```rust
//! use outcome::{err, Outcome};
//!
//! fn find(id: u32) -> Outcome<i32> {
//!     if id == 1 {
//!         Outcome::success(42)
//!     } else {
//!         err!("not found ", id).into()
//!     }
//! }
//!
//! let found = find(1);
//! assert!(found.is_success());
//! assert_eq!(found.cast::<f64>().unwrap_value(), &42.0);
//!
//! let missing = find(404);
//! assert!(missing.is_failure());
//! assert_eq!(missing.unwrap_error(), "not found 404");
//! assert!(missing.to_unit_outcome().is_failure());
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::ErrorStream;
pub use crate::core::{
    err, Cast, ErrorValue, InvalidStateError, Outcome, UnitOutcome, UNINITIALIZED_MESSAGE,
};
