use std::{error::Error as StdError, fmt};

use thiserror::Error;

/// The three calling conventions a target type may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// The raw element is passed as the sole constructor argument.
    OneArgument,
    /// The raw element is unpacked into ordered positional arguments.
    Positional,
    /// The raw element is unpacked into named arguments.
    Keyword,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Convention::OneArgument => "one-argument",
            Convention::Positional => "positional",
            Convention::Keyword => "keyword",
        };
        write!(f, "{name}")
    }
}

/// Reasons a single element can fail to cast.
///
/// Every failure raised while building one output from one raw element is
/// expressed as one of these variants, whether it comes from the casting
/// strategy itself (shape and argument mismatches) or from the target
/// constructor ([`CastError::Constructor`]).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CastError {
    /// The element, or one of its arguments, has the wrong shape or type.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Positional construction received the wrong number of arguments.
    #[error("expected {expected} positional arguments, found {found}")]
    Arity { expected: usize, found: usize },

    /// Keyword construction is missing a required argument.
    #[error("missing argument `{0}`")]
    MissingArgument(String),

    /// Keyword construction received an argument the target does not accept.
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    /// The target type does not support the attempted calling convention.
    #[error("the target type does not support {0} construction")]
    Unsupported(Convention),

    /// The input has the right shape but its value cannot be converted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The target constructor itself reported a failure.
    #[error("constructor failed: {0}")]
    Constructor(#[source] Box<dyn StdError + Send + Sync + 'static>),
}

impl CastError {
    /// Wraps an error reported by the target constructor, preserving it as
    /// the error source.
    pub fn constructor<E: StdError + Send + Sync + 'static>(error: E) -> Self {
        CastError::Constructor(Box::new(error))
    }
}

/// A casting failure surfaced to the caller, terminating a
/// [`CastIter`](crate::CastIter) pass.
///
/// Pairs the raw element that failed with its zero-based position in the
/// input sequence and the reason the cast was rejected. The reason is
/// available through [`std::error::Error::source`] as well as the `reason`
/// field.
#[derive(Debug)]
pub struct CastFailure<V> {
    /// The raw element that could not be cast.
    pub element: V,
    /// The element's zero-based index in the input sequence.
    pub index: usize,
    /// Why the cast was rejected.
    pub reason: CastError,
}

impl<V> fmt::Display for CastFailure<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot cast element at index {}: {}", self.index, self.reason)
    }
}

impl<V: fmt::Debug> StdError for CastFailure<V> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.reason)
    }
}
