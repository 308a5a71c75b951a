//! Error types for bidi resolution.

use std::fmt;
use std::ops::Range;

/// Result type alias for bidi operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bidi operations.
///
/// Overflow of the directional status stack or the bracket stack is part of
/// the algorithm and never surfaces here. Only caller-supplied ranges can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A paragraph or line range is empty, out of bounds, or does not line up
    /// with paragraph boundaries.
    InvalidRange { start: usize, end: usize, len: usize },
}

impl Error {
    pub(crate) fn invalid_range(range: &Range<usize>, len: usize) -> Self {
        Self::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, end, len } => {
                write!(
                    f,
                    "invalid range {start}..{end} for text of {len} code points"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRange {
            start: 3,
            end: 9,
            len: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("3..9"));
        assert!(msg.contains("5 code points"));
    }

    #[test]
    fn test_invalid_range_helper() {
        let err = Error::invalid_range(&(2..4), 10);
        assert_eq!(
            err,
            Error::InvalidRange {
                start: 2,
                end: 4,
                len: 10
            }
        );
    }
}
