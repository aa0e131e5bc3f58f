//! Unified error type for the region-expr public API.

use crate::color::InvalidColorError;
use crate::grid::DimensionMismatchError;
use std::fmt;

/// Unified error type for the region-expr public API.
///
/// Wraps every error the crate can produce for convenient `?` propagation.
///
/// # Example
///
/// ```
/// use region_expr::{PixelGrid, RegionError, Rgba};
///
/// fn load(rows: Vec<Vec<Rgba>>) -> Result<PixelGrid, RegionError> {
///     Ok(PixelGrid::from_rows(rows)?)
/// }
///
/// assert!(load(vec![vec![Rgba::TRANSPARENT], vec![]]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RegionError {
    /// Raw color channels were malformed
    InvalidColor(InvalidColorError),
    /// Pixel data was not rectangular
    DimensionMismatch(DimensionMismatchError),
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::InvalidColor(err) => write!(f, "invalid color: {}", err),
            RegionError::DimensionMismatch(err) => write!(f, "dimension mismatch: {}", err),
        }
    }
}

impl std::error::Error for RegionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegionError::InvalidColor(err) => Some(err),
            RegionError::DimensionMismatch(err) => Some(err),
        }
    }
}

impl From<InvalidColorError> for RegionError {
    fn from(err: InvalidColorError) -> Self {
        RegionError::InvalidColor(err)
    }
}

impl From<DimensionMismatchError> for RegionError {
    fn from(err: DimensionMismatchError) -> Self {
        RegionError::DimensionMismatch(err)
    }
}
