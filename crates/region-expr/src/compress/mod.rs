//! Greedy compression of a pixel grid into same-color rectangles.
//!
//! Both modes scan the vertically flipped grid row by row (row 0 is the
//! visual bottom), left to right, and emit rectangles in that order. The
//! order is observable downstream: expression ids are positions in it.
//!
//! A pixel is skipped when it is empty, i.e. its four channels sum to zero.
//! Opaque black is therefore drawn while transparent black is not; this is a
//! known defect kept for output compatibility.

mod exact;
mod legacy;
mod rectangle;

pub use rectangle::Rectangle;

use crate::grid::PixelGrid;

/// Compression strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressMode {
    /// Historical greedy scan (default).
    ///
    /// Width grows along the anchor row, height along the anchor column.
    /// No cell is ever marked as consumed, so rectangles overlap and may
    /// paint over cells of another color, and isolated pixels are dropped.
    /// Output is pinned by fixtures and must not change.
    #[default]
    Legacy,
    /// Pixel-perfect, non-overlapping decomposition.
    ///
    /// Every non-empty pixel is covered by exactly one rectangle of its own
    /// color, isolated pixels included.
    Exact,
}

/// Compress `grid` with [`CompressMode::Legacy`].
///
/// # Example
///
/// ```
/// use region_expr::{compress, PixelGrid, Rectangle, Rgba};
///
/// let c = Rgba::opaque(10, 20, 30);
/// let grid = PixelGrid::from_rows(vec![vec![c, c]]).unwrap();
///
/// assert_eq!(
///     compress(&grid),
///     vec![Rectangle { x: 0, y: 0, width: 2, height: 1, color: c }]
/// );
/// ```
pub fn compress(grid: &PixelGrid) -> Vec<Rectangle> {
    compress_with(grid, CompressMode::Legacy)
}

/// Compress `grid` with the given mode. `grid` is not modified.
pub fn compress_with(grid: &PixelGrid, mode: CompressMode) -> Vec<Rectangle> {
    if grid.is_empty() {
        return Vec::new();
    }

    let flipped = grid.flipped();
    match mode {
        CompressMode::Legacy => legacy::scan(&flipped),
        CompressMode::Exact => exact::scan(&flipped),
    }
}
