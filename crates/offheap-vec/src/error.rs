//! Vector-specific error types.

use std::error::Error;
use std::fmt;

/// An index outside `[0, len)` was passed to `get`, `set`, or
/// [`Vector::check_index`](crate::Vector::check_index).
///
/// Raised explicitly, never silently clamped. Negative indices and indices
/// past the current length both map here, which is why vector indices are
/// `i64` throughout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The offending index.
    pub index: i64,
    /// The vector's length at the time of the access.
    pub len: i64,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for vector of length {}",
            self.index, self.len
        )
    }
}

impl Error for IndexOutOfRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_index_and_len() {
        let err = IndexOutOfRange { index: -1, len: 4 };
        assert_eq!(err.to_string(), "index -1 out of range for vector of length 4");
    }
}
