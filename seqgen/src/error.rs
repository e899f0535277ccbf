use ibig::{IBig, UBig};
use thiserror::Error;

use crate::sequence::SequenceKind;

/// Errors raised while constructing or accessing a sequence.
///
/// Construction either fully succeeds or fails with one of these; access
/// errors are raised by `get` and friends. Nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation requires a finite operand but got an infinite one.
    #[error("'{kind}' does not support infinite sequences")]
    InfiniteNotSupported { kind: SequenceKind },
    /// A constructor argument was rejected.
    ///
    /// Zero steps, non-integer bounds, arities that do not fit and the like.
    #[error("invalid argument for '{kind}': {reason}")]
    InvalidConstructorArgument {
        kind: SequenceKind,
        reason: String,
    },
    /// The index lies outside `[0, length)` after resolving negatives.
    #[error("index {index} is out of bounds for '{kind}' of length {length}")]
    IndexOutOfBounds {
        kind: SequenceKind,
        index: IBig,
        length: UBig,
    },
    /// A negative index was used on an infinite sequence.
    #[error("'{kind}' is infinite and does not support negative index {index}")]
    NegativeIndexOnInfinite { kind: SequenceKind, index: IBig },
    /// An index was supplied that is not an integer.
    #[error("index must be an integer, found {found}")]
    InvalidIndexType { found: &'static str },
    /// The variant does not implement the requested operation.
    #[error("'{kind}' does not support {operation}")]
    UnsupportedOperation {
        kind: SequenceKind,
        operation: &'static str,
    },
    /// A supported lookup did not find the value.
    #[error("value not found in '{kind}'")]
    NotFound { kind: SequenceKind },
}

impl Error {
    pub(crate) fn invalid_argument(kind: SequenceKind, reason: impl Into<String>) -> Self {
        Error::InvalidConstructorArgument {
            kind,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use ibig::{ibig, ubig};

    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let e = Error::IndexOutOfBounds {
            kind: SequenceKind::Range,
            index: ibig!(10),
            length: ubig!(3),
        };
        assert_eq!(
            e.to_string(),
            "index 10 is out of bounds for 'Range' of length 3"
        );
    }

    #[test]
    fn test_infinite_message() {
        let e = Error::InfiniteNotSupported {
            kind: SequenceKind::Product,
        };
        assert_eq!(e.to_string(), "'Product' does not support infinite sequences");
    }
}
