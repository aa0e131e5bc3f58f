use std::fmt;

/// Error returned when pixel data does not form a rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionMismatchError {
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },
    /// A flat RGBA buffer's length is not `width * height * 4`.
    BufferLength {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        found: usize,
    },
}

impl fmt::Display for DimensionMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionMismatchError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} pixels, expected {} like row 0",
                row, found, expected
            ),
            DimensionMismatchError::BufferLength { expected, found } => write!(
                f,
                "RGBA buffer has {} bytes, expected {}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for DimensionMismatchError {}
