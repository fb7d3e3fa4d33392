//! The value-or-error container.
//!
//! An [`Outcome`] is always in exactly one of two states, `Success` or
//! `Failure`. Any state may be replaced by any other through reassignment;
//! no transition is forbidden. Unwrapping the variant that is not populated
//! is a programmer error and raises an [`InvalidStateError`].

use super::cast::Cast;
use super::error_value::ErrorValue;
use super::fault::InvalidStateError;
use crate::builder::ErrorStream;
use serde::{Deserialize, Serialize};

/// Message carried by a default-constructed outcome.
pub const UNINITIALIZED_MESSAGE: &str = "result is uninitialized";

/// An outcome that carries no value on success.
pub type UnitOutcome = Outcome<()>;

/// Either a success value of type `T` or an [`ErrorValue`].
///
/// A default-constructed outcome is a failure carrying
/// [`UNINITIALIZED_MESSAGE`], so a result that was never assigned can not be
/// mistaken for a success.
///
/// # Example
///
/// ```rust
/// use outcome::{ErrorValue, Outcome};
///
/// let mut result = Outcome::success(32);
/// assert!(result.is_success());
/// assert_eq!(*result.unwrap_value(), 32);
///
/// result = ErrorValue::new("bad").into();
/// assert!(result.is_failure());
/// assert_eq!(result.unwrap_error(), "bad");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(ErrorValue),
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::Failure(ErrorValue::new(UNINITIALIZED_MESSAGE))
    }
}

impl<T> Outcome<T> {
    /// Create a success outcome holding `value`.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Create a failure outcome from anything convertible to an
    /// [`ErrorValue`]: text, an [`ErrorStream`], or an error value itself.
    pub fn failure(error: impl Into<ErrorValue>) -> Self {
        Self::Failure(error.into())
    }

    /// Check if the outcome holds a value.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check if the outcome holds an error.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the success value.
    ///
    /// # Panics
    ///
    /// Panics with the [`InvalidStateError::ValueOfFailure`] message if the
    /// outcome is a failure.
    ///
    /// ```rust,should_panic
    /// use outcome::Outcome;
    ///
    /// let result: Outcome<i32> = Outcome::failure("undefined error");
    /// result.unwrap_value();
    /// ```
    #[track_caller]
    pub fn unwrap_value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => InvalidStateError::ValueOfFailure.raise(),
        }
    }

    /// Borrow the error.
    ///
    /// # Panics
    ///
    /// Panics with the [`InvalidStateError::ErrorOfSuccess`] message if the
    /// outcome is a success.
    #[track_caller]
    pub fn unwrap_error(&self) -> &ErrorValue {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => InvalidStateError::ErrorOfSuccess.raise(),
        }
    }

    /// Consume the outcome, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidStateError::ValueOfFailure`] if the outcome is a
    /// failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => InvalidStateError::ValueOfFailure.raise(),
        }
    }

    /// Consume the outcome, returning the error.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidStateError::ErrorOfSuccess`] if the outcome is a
    /// success.
    #[track_caller]
    pub fn into_error(self) -> ErrorValue {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => InvalidStateError::ErrorOfSuccess.raise(),
        }
    }

    /// Borrow the success value, reporting misuse as an error instead of
    /// unwinding.
    pub fn try_value(&self) -> Result<&T, InvalidStateError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(InvalidStateError::ValueOfFailure),
        }
    }

    /// Borrow the error, reporting misuse as an error instead of unwinding.
    pub fn try_error(&self) -> Result<&ErrorValue, InvalidStateError> {
        match self {
            Self::Failure(error) => Ok(error),
            Self::Success(_) => Err(InvalidStateError::ErrorOfSuccess),
        }
    }

    /// Replace the current state with a success holding `value`.
    pub fn set_value(&mut self, value: T) {
        *self = Self::Success(value);
    }

    /// Replace the current state with a failure holding `error`.
    pub fn set_error(&mut self, error: impl Into<ErrorValue>) {
        *self = Self::Failure(error.into());
    }

    /// Cast into an outcome of another value type.
    ///
    /// A failure is copied unchanged. A success value is converted with
    /// [`Cast`], which does not validate the value: a lossy cast stays lossy.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let as_int = Outcome::success(32_i32);
    /// let as_float = as_int.cast::<f32>();
    /// assert_eq!(*as_float.unwrap_value(), 32.0);
    ///
    /// let failed: Outcome<i32> = Outcome::failure("unknown error");
    /// assert_eq!(failed.cast::<f32>().unwrap_error(), "unknown error");
    /// ```
    pub fn cast<U>(&self) -> Outcome<U>
    where
        T: Clone + Cast<U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value.clone().cast()),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }

    /// Convert into an outcome of another value type through [`Into`].
    ///
    /// Same branch behavior as [`Outcome::cast`], for conversions the type
    /// system already knows to be lossless.
    pub fn convert<U>(&self) -> Outcome<U>
    where
        T: Clone + Into<U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value.clone().into()),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }

    /// Drop the success value, keeping only the branch and any error.
    ///
    /// ```rust
    /// use outcome::{Outcome, UnitOutcome};
    ///
    /// let status: UnitOutcome = Outcome::success(32).to_unit_outcome();
    /// assert!(status.is_success());
    /// ```
    pub fn to_unit_outcome(&self) -> UnitOutcome {
        match self {
            Self::Success(_) => Outcome::ok(),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }

    /// View as a standard [`Result`] of references.
    pub fn as_result(&self) -> Result<&T, &ErrorValue> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Convert into a standard [`Result`], for use with `?`.
    pub fn into_result(self) -> Result<T, ErrorValue> {
        self.into()
    }
}

impl Outcome<()> {
    /// A success that carries no value.
    pub fn ok() -> Self {
        Self::Success(())
    }
}

impl<T> From<ErrorValue> for Outcome<T> {
    fn from(error: ErrorValue) -> Self {
        Self::Failure(error)
    }
}

impl<T> From<ErrorStream> for Outcome<T> {
    fn from(stream: ErrorStream) -> Self {
        Self::Failure(stream.into())
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<ErrorValue>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorValue> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::err;
    use std::panic::{self, UnwindSafe};

    fn fault_of<F: FnOnce() + UnwindSafe>(f: F) -> Option<String> {
        panic::catch_unwind(f)
            .err()
            .and_then(|payload| payload.downcast_ref::<String>().cloned())
    }

    fn lookup(found: bool) -> Outcome<i32> {
        if found {
            Outcome::success(42)
        } else {
            err("not found").into()
        }
    }

    #[test]
    fn success_outcome_reports_success() {
        let result = Outcome::success(32);
        assert!(result.is_success());
        assert!(!result.is_failure());
    }

    #[test]
    fn failure_outcome_reports_failure() {
        let result: Outcome<i32> = Outcome::failure("unknown error");
        assert!(result.is_failure());
        assert!(!result.is_success());
    }

    #[test]
    fn default_outcome_is_uninitialized_failure() {
        let result: Outcome<i32> = Outcome::default();
        assert!(result.is_failure());
        assert_eq!(result.unwrap_error(), UNINITIALIZED_MESSAGE);

        let status = UnitOutcome::default();
        assert_eq!(status.unwrap_error(), "result is uninitialized");
    }

    #[test]
    fn unwrap_value_on_success() {
        let result = Outcome::success(32);
        assert_eq!(*result.unwrap_value(), 32);
        assert_eq!(result.into_value(), 32);
    }

    #[test]
    fn unwrap_value_on_failure_raises_fault() {
        let result: Outcome<i32> = Outcome::failure("unknown error");
        assert_eq!(
            fault_of(|| {
                result.unwrap_value();
            }),
            Some(InvalidStateError::ValueOfFailure.to_string())
        );
        assert_eq!(
            fault_of(|| {
                result.clone().into_value();
            }),
            Some(InvalidStateError::ValueOfFailure.to_string())
        );
    }

    #[test]
    fn unwrap_error_on_failure() {
        let result: Outcome<i32> = Outcome::failure("unknown error");
        assert_eq!(result.unwrap_error(), "unknown error");
        assert_eq!(result.into_error(), "unknown error");
    }

    #[test]
    fn unwrap_error_on_success_raises_fault() {
        let result = Outcome::success(32);
        assert_eq!(
            fault_of(|| {
                result.unwrap_error();
            }),
            Some(InvalidStateError::ErrorOfSuccess.to_string())
        );
        assert_eq!(
            fault_of(|| {
                result.into_error();
            }),
            Some(InvalidStateError::ErrorOfSuccess.to_string())
        );
    }

    #[test]
    #[should_panic(expected = "unable to unwrap value of failure outcome")]
    fn unwrap_value_on_failure_panic_message_names_the_fault() {
        Outcome::<i32>::failure("bad").unwrap_value();
    }

    #[test]
    #[should_panic(expected = "unable to unwrap error of success outcome")]
    fn unwrap_error_on_success_panic_message_names_the_fault() {
        Outcome::success(1).unwrap_error();
    }

    #[test]
    #[should_panic]
    fn unwrap_value_on_default_panics() {
        Outcome::<String>::default().unwrap_value();
    }

    #[test]
    fn try_accessors_report_misuse() {
        let ok = Outcome::success(1);
        let failed: Outcome<i32> = Outcome::failure("bad");

        assert_eq!(ok.try_value(), Ok(&1));
        assert_eq!(ok.try_error(), Err(InvalidStateError::ErrorOfSuccess));
        assert_eq!(failed.try_value(), Err(InvalidStateError::ValueOfFailure));
        assert_eq!(failed.try_error(), Ok(&err("bad")));
    }

    #[test]
    fn rewriting_replaces_previous_state() {
        let mut result = Outcome::success(32);
        assert_eq!(*result.unwrap_value(), 32);

        result = err("unknown error").into();
        assert_eq!(result.unwrap_error(), "unknown error");

        result.set_error("other error");
        assert_eq!(result.unwrap_error(), "other error");

        result.set_value(32);
        assert_eq!(*result.unwrap_value(), 32);

        result = Outcome::success(16);
        assert_eq!(result, Outcome::Success(16));
    }

    #[test]
    fn assignment_inside_scope_is_preserved() {
        let mut result: Outcome<i32> = Outcome::default();
        {
            result.set_value(32);
            assert!(result.is_success());
        }
        assert_eq!(*result.unwrap_value(), 32);

        {
            result.set_error("unknown error");
        }
        assert_eq!(result.unwrap_error(), "unknown error");
    }

    #[test]
    fn function_returning_outcome() {
        let found = lookup(true);
        assert!(found.is_success());
        assert_eq!(*found.unwrap_value(), 42);

        let missing = lookup(false);
        assert!(missing.is_failure());
        assert_eq!(missing.unwrap_error(), "not found");
    }

    #[test]
    fn failure_from_stream() {
        let result: Outcome<i32> = ErrorStream::new().push("not found ").push(404).into();
        assert_eq!(result.unwrap_error(), "not found 404");
    }

    #[test]
    fn cast_converts_success_value() {
        let result = Outcome::success(32_i32).cast::<f32>();
        assert_eq!(*result.unwrap_value(), 32.0_f32);
    }

    #[test]
    fn cast_does_not_validate_value() {
        let result = Outcome::success(300_i32).cast::<u8>();
        assert_eq!(*result.unwrap_value(), 44);
    }

    #[test]
    fn cast_preserves_failure() {
        let source: Outcome<i32> = Outcome::failure("unknown error");
        let result = source.cast::<f64>();
        assert_eq!(result.unwrap_error(), source.unwrap_error());
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Int {
        data: i32,
    }

    impl Cast<i32> for Int {
        fn cast(self) -> i32 {
            self.data
        }
    }

    #[test]
    fn cast_uses_user_defined_conversion() {
        let source = Outcome::success(Int { data: 32 });
        let result: Outcome<i32> = source.cast();
        assert_eq!(*result.unwrap_value(), source.unwrap_value().data);

        let failed: Outcome<Int> = Outcome::failure("unknown error");
        assert_eq!(failed.cast::<i32>().unwrap_error(), "unknown error");
    }

    #[test]
    fn cast_covers_char_and_bool() {
        assert_eq!(*Outcome::success('a').cast::<u32>().unwrap_value(), 97);
        assert_eq!(*Outcome::success(b'A').cast::<char>().unwrap_value(), 'A');
        assert_eq!(*Outcome::success(true).cast::<i32>().unwrap_value(), 1);
    }

    #[test]
    fn identity_of_owned_types_goes_through_convert() {
        let source = Outcome::success(String::from("kept"));
        assert_eq!(source.convert::<String>(), source);
    }

    #[test]
    fn convert_uses_into() {
        let result = Outcome::success(7_u8).convert::<u64>();
        assert_eq!(result, Outcome::Success(7_u64));

        let failed: Outcome<&str> = Outcome::failure("bad");
        assert_eq!(failed.convert::<String>().unwrap_error(), "bad");
    }

    #[test]
    fn narrowing_to_unit_outcome() {
        assert_eq!(Outcome::success(32).to_unit_outcome(), UnitOutcome::ok());

        let failed: Outcome<i32> = Outcome::failure("unknown error");
        let status = failed.to_unit_outcome();
        assert!(status.is_failure());
        assert_eq!(status.unwrap_error(), failed.unwrap_error());
    }

    #[test]
    fn converts_to_and_from_std_result() {
        let from_ok: Outcome<i32> = Ok::<_, String>(5).into();
        assert_eq!(from_ok.as_result(), Ok(&5));

        let from_err: Outcome<i32> = Err::<i32, _>("bad").into();
        assert_eq!(from_err.clone().into_result(), Err(err("bad")));
        assert_eq!(from_err.as_result(), Err(&err("bad")));
    }

    #[test]
    fn question_mark_propagates_failure() {
        fn double(found: bool) -> Result<i32, ErrorValue> {
            let value = lookup(found).into_result()?;
            Ok(value * 2)
        }

        assert_eq!(double(true), Ok(84));
        assert_eq!(double(false), Err(err("not found")));
    }

    #[test]
    fn serializes_as_tagged_variant() {
        let ok = serde_json::to_string(&Outcome::success(32)).unwrap();
        assert_eq!(ok, r#"{"Success":32}"#);

        let failed: Outcome<i32> = Outcome::failure("bad");
        let json = serde_json::to_string(&failed).unwrap();
        assert_eq!(json, r#"{"Failure":"bad"}"#);

        let back: Outcome<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, failed);
    }
}
