use trackable::error::{ErrorKind as TrackableErrorKind, ErrorKindExt};
use trackable::error::{Failure, TrackableError};

/// This crate specific `Error` type.
#[derive(Debug, Clone, TrackableError)]
pub struct Error(TrackableError<ErrorKind>);
impl From<Failure> for Error {
    fn from(f: Failure) -> Self {
        ErrorKind::Other.takes_over(f).into()
    }
}

/// Possible error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The bounds of an option are not finite or not strictly increasing.
    InvalidBounds,

    /// Logarithmic scaling was requested for a range whose lower bound is not positive.
    InvalidLogDomain,

    /// A parameter was extracted as a type different from the stored one.
    TypeMismatch,

    /// Invalid input was given.
    InvalidInput,

    /// Other error.
    Other,
}
impl TrackableErrorKind for ErrorKind {}
