//! Rectangular pixel grid.

mod error;
mod pixel_grid;

pub use error::DimensionMismatchError;
pub use pixel_grid::PixelGrid;
