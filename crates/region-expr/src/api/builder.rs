//! [`RegionSynthesizer`] builder: quantize, compress and synthesize in one call.

use std::num::NonZeroU8;

use crate::compress::{compress_with, CompressMode, Rectangle};
use crate::grid::PixelGrid;
use crate::quantize::quantize;
use crate::synth::{synthesize, Expression};

/// Configurable pipeline from a [`PixelGrid`] to expressions.
///
/// Defaults: no quantization, [`CompressMode::Legacy`].
///
/// # Example
///
/// ```
/// use std::num::NonZeroU8;
/// use region_expr::{CompressMode, PixelGrid, RegionSynthesizer, Rgba};
///
/// let grid = PixelGrid::filled(2, 2, Rgba::opaque(10, 20, 30));
/// let exprs = RegionSynthesizer::new()
///     .precision(NonZeroU8::new(4))
///     .mode(CompressMode::Exact)
///     .expressions(&grid);
///
/// assert_eq!(exprs.len(), 1);
/// assert_eq!(exprs[0].color, "#0c1420");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionSynthesizer {
    precision: Option<NonZeroU8>,
    mode: CompressMode,
}

impl RegionSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantization step applied before compression; `None` disables it.
    pub fn precision(mut self, precision: Option<NonZeroU8>) -> Self {
        self.precision = precision;
        self
    }

    pub fn mode(mut self, mode: CompressMode) -> Self {
        self.mode = mode;
        self
    }

    /// Quantize (if configured) and compress.
    pub fn rectangles(&self, grid: &PixelGrid) -> Vec<Rectangle> {
        match self.precision {
            Some(precision) => compress_with(&quantize(grid, precision), self.mode),
            None => compress_with(grid, self.mode),
        }
    }

    /// Quantize (if configured), compress and synthesize.
    pub fn expressions(&self, grid: &PixelGrid) -> Vec<Expression> {
        synthesize(&self.rectangles(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_defaults_match_plain_compress() {
        let c = Rgba::opaque(9, 9, 9);
        let grid = PixelGrid::filled(3, 2, c);
        assert_eq!(
            RegionSynthesizer::new().rectangles(&grid),
            crate::compress::compress(&grid)
        );
    }

    #[test]
    fn test_precision_merges_near_colors() {
        let grid = PixelGrid::from_rows(vec![vec![
            Rgba::opaque(100, 100, 100),
            Rgba::opaque(101, 99, 100),
        ]])
        .unwrap();

        assert!(RegionSynthesizer::new().rectangles(&grid).is_empty());

        let rects = RegionSynthesizer::new()
            .precision(NonZeroU8::new(4))
            .rectangles(&grid);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].width, 2);
        assert_eq!(rects[0].color, Rgba::opaque(100, 100, 100));
    }
}
