//! [`PixelGrid`]: row-major RGBA pixels with a rectangular invariant.

use super::DimensionMismatchError;
use crate::color::Rgba;

/// A rectangular grid of RGBA pixels.
///
/// Pixels are stored row-major. Row 0 is the first row in storage order,
/// which for decoded images is the top of the picture. The compressor works
/// on [`flipped()`](PixelGrid::flipped) copies so that row 0 becomes the
/// visual bottom, matching the upward y axis of graph space.
///
/// The rectangular invariant is checked once at construction, so every
/// `PixelGrid` in existence has rows of equal length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelGrid {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// A grid of `width * height` copies of `fill`.
    pub fn filled(width: usize, height: usize, fill: Rgba) -> Self {
        Self {
            pixels: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Build a grid from nested rows.
    ///
    /// # Example
    ///
    /// ```
    /// use region_expr::{PixelGrid, Rgba};
    ///
    /// let c = Rgba::opaque(1, 2, 3);
    /// assert!(PixelGrid::from_rows(vec![vec![c, c], vec![c]]).is_err());
    ///
    /// let grid = PixelGrid::from_rows(vec![vec![c, c], vec![c, c]]).unwrap();
    /// assert_eq!((grid.width(), grid.height()), (2, 2));
    /// ```
    pub fn from_rows(rows: Vec<Vec<Rgba>>) -> Result<Self, DimensionMismatchError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut pixels = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(DimensionMismatchError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            pixels.extend(cells);
        }

        // A grid of zero-width rows holds no pixels; normalise it to 0x0.
        let height = if width == 0 { 0 } else { height };
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build a grid from a flat `[R, G, B, A, ...]` byte buffer.
    pub fn from_rgba_bytes(
        bytes: &[u8],
        width: usize,
        height: usize,
    ) -> Result<Self, DimensionMismatchError> {
        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(DimensionMismatchError::BufferLength {
                expected,
                found: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();

        let height = if width == 0 { 0 } else { height };
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Overwrite the pixel at column `x`, row `y`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Rgba] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Iterate over rows in storage order.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Rgba> {
        // chunks_exact panics on 0; an empty grid has no rows anyway.
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// A copy of this grid with `f` applied to every pixel.
    pub fn map(&self, f: impl Fn(Rgba) -> Rgba) -> Self {
        Self {
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// A vertically flipped copy: the last row becomes row 0.
    ///
    /// `self` is left untouched.
    pub fn flipped(&self) -> Self {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in self.rows().rev() {
            pixels.extend_from_slice(row);
        }
        Self {
            pixels,
            width: self.width,
            height: self.height,
        }
    }

    /// Flat `[R, G, B, A, ...]` bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_bytes()).collect()
    }
}
