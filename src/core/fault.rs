//! Invalid-state faults raised when the wrong variant is unwrapped.

use thiserror::Error;

/// Programmer error signalled by the unwrap accessors of
/// [`Outcome`](super::Outcome).
///
/// The panicking accessors unwind with this value's `Display` text as the
/// panic message, reported at the caller's location. The `try_*` accessors
/// return it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidStateError {
    /// A value was requested from a failure outcome.
    #[error("unable to unwrap value of failure outcome")]
    ValueOfFailure,

    /// An error was requested from a success outcome.
    #[error("unable to unwrap error of success outcome")]
    ErrorOfSuccess,
}

impl InvalidStateError {
    /// Log the fault and panic with its message.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        let location = std::panic::Location::caller();
        tracing::error!(fault = %self, %location, "invalid outcome access");
        panic!("{self}")
    }
}
