//! Error types for sequence construction and chain invocation.
//!
//! Only two conditions are defined by the engine itself. Failures raised by
//! caller-supplied closures are never wrapped: panics unwind through the
//! combinators untouched and `Result` items flow through as ordinary values.

/// Represents a source that exposes none of the accepted capability shapes.
///
/// Returned by [`Sequence::from_source`](crate::sequence::Sequence::from_source)
/// when the probed [`Source`](crate::source::Source) offers neither an
/// iterable, a pull function, nor an indexed view.
///
/// # Examples
///
/// ```rust
/// use seqkit::error::InvalidSourceError;
///
/// let error = InvalidSourceError { label: Some("settings".to_string()) };
/// assert_eq!(
///     format!("{}", error),
///     "source `settings` is not iterable, pullable, or indexable"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSourceError {
    /// Optional human-readable name attached to the probed source.
    pub label: Option<String>,
}

impl std::fmt::Display for InvalidSourceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(
                formatter,
                "source `{label}` is not iterable, pullable, or indexable"
            ),
            None => write!(formatter, "source is not iterable, pullable, or indexable"),
        }
    }
}

impl std::error::Error for InvalidSourceError {}

/// Represents a chain-of-responsibility call in which every handler forwarded
/// to `next` and no handler was left to produce a result.
///
/// The built callable stays usable after this error; only the failing call is
/// affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainExhaustedError {
    /// Number of handlers captured by the chain.
    pub handler_count: usize,
}

impl std::fmt::Display for ChainExhaustedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "chain exhausted: all {} handler(s) forwarded to next",
            self.handler_count
        )
    }
}

impl std::error::Error for ChainExhaustedError {}

/// Unified error type for the crate.
///
/// # Examples
///
/// ```rust
/// use seqkit::error::{ChainExhaustedError, SequenceError};
///
/// let error = SequenceError::ChainExhausted(ChainExhaustedError { handler_count: 0 });
/// assert!(error.is_chain_exhausted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The source matched none of the accepted capability shapes.
    InvalidSource(InvalidSourceError),
    /// No handler in a chain produced a terminal result.
    ChainExhausted(ChainExhaustedError),
}

impl SequenceError {
    /// Returns `true` if this is an [`SequenceError::InvalidSource`].
    #[inline]
    pub const fn is_invalid_source(&self) -> bool {
        matches!(self, Self::InvalidSource(_))
    }

    /// Returns `true` if this is a [`SequenceError::ChainExhausted`].
    #[inline]
    pub const fn is_chain_exhausted(&self) -> bool {
        matches!(self, Self::ChainExhausted(_))
    }
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSource(error) => write!(formatter, "{error}"),
            Self::ChainExhausted(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSource(error) => Some(error),
            Self::ChainExhausted(error) => Some(error),
        }
    }
}

impl From<InvalidSourceError> for SequenceError {
    fn from(error: InvalidSourceError) -> Self {
        Self::InvalidSource(error)
    }
}

impl From<ChainExhaustedError> for SequenceError {
    fn from(error: ChainExhaustedError) -> Self {
        Self::ChainExhausted(error)
    }
}
