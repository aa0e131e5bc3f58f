//! Color quantization: snap RGB channels to multiples of a precision step.
//!
//! Near-identical colors (anti-aliasing, JPEG noise, resize filtering) turn
//! into exact matches, which lets the compressor grow longer runs.
//!
//! Rounding is half-up: a channel exactly halfway between two multiples goes
//! to the upper one. Results saturate at 255, so `254` at precision 4 becomes
//! `255` rather than `256`.

use std::num::NonZeroU8;

use crate::color::Rgba;
use crate::grid::PixelGrid;

/// Precision used when the caller does not pick one.
pub const DEFAULT_PRECISION: NonZeroU8 = match NonZeroU8::new(4) {
    Some(p) => p,
    None => unreachable!(),
};

/// Round a single channel to the nearest multiple of `precision`, saturating at 255.
#[inline]
pub fn quantize_channel(channel: u8, precision: NonZeroU8) -> u8 {
    let p = precision.get() as u32;
    let snapped = (channel as u32 + p / 2) / p * p;
    snapped.min(255) as u8
}

/// Quantize one pixel's RGB channels. Alpha is passed through.
#[inline]
pub fn quantize_pixel(pixel: Rgba, precision: NonZeroU8) -> Rgba {
    Rgba::new(
        quantize_channel(pixel.r, precision),
        quantize_channel(pixel.g, precision),
        quantize_channel(pixel.b, precision),
        pixel.a,
    )
}

/// Return a quantized copy of `grid`.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU8;
/// use region_expr::{quantize, PixelGrid, Rgba};
///
/// let grid = PixelGrid::filled(1, 1, Rgba::new(9, 10, 255, 7));
/// let q = quantize(&grid, NonZeroU8::new(4).unwrap());
/// assert_eq!(q.get(0, 0), Some(Rgba::new(8, 12, 255, 7)));
/// ```
pub fn quantize(grid: &PixelGrid, precision: NonZeroU8) -> PixelGrid {
    grid.map(|px| quantize_pixel(px, precision))
}
