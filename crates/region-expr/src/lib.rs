//! region-expr: pixel grids to calculator region expressions
//!
//! This library compresses a rectangular RGBA pixel grid into axis-aligned,
//! uniformly colored rectangles and writes each rectangle as a two-variable
//! inequality region that a graphing calculator can plot.
//!
//! # Quick Start
//!
//! ```
//! use region_expr::{compress, synthesize, PixelGrid, Rgba};
//!
//! let c = Rgba::opaque(10, 20, 30);
//! let grid = PixelGrid::from_rows(vec![vec![c, c], vec![c, c]]).unwrap();
//!
//! let rectangles = compress(&grid);
//! let expressions = synthesize(&rectangles);
//!
//! assert_eq!(expressions[0].color, "#0a141e");
//! assert_eq!(expressions[0].region, "0\\le x\\le0.2\\left\\{0\\le y\\le0.2\\right\\}");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelGrid (row 0 = top)
//!     |
//!     v
//! [quantize]        optional, snaps RGB to multiples of a precision step
//!     |
//!     v
//! flipped copy      row 0 = visual bottom, source grid untouched
//!     |
//!     v
//! compress          Legacy (greedy, overlapping) or Exact (disjoint cover)
//!     |
//!     v
//! synthesize        0.1 graph units per pixel, ids = rectangle index
//!     |
//!     v
//! Vec<Expression>
//! ```
//!
//! # Compression Modes
//!
//! [`CompressMode::Legacy`] reproduces the historical greedy scan exactly,
//! including its inaccuracies: rectangles overlap, the 2D extent is
//! guessed from one row and one column, and isolated pixels disappear.
//! Documents produced by earlier tooling compare equal only in this mode.
//!
//! [`CompressMode::Exact`] covers every non-empty pixel exactly once with a
//! rectangle of its own color. It usually emits fewer, never-overlapping
//! rectangles and is lossless apart from the empty-pixel rule below.
//!
//! # Empty Pixels
//!
//! A pixel is empty when `r + g + b + a == 0`. Only transparent black is
//! skipped; opaque black is drawn, and so is a transparent pixel with any
//! color left in its RGB channels.

pub mod api;
pub mod color;
pub mod compress;
pub mod grid;
pub mod quantize;
pub mod synth;

#[cfg(test)]
mod domain_tests;

pub use api::{RegionError, RegionSynthesizer};
pub use color::{InvalidColorError, Rgba};
pub use compress::{compress, compress_with, CompressMode, Rectangle};
pub use grid::{DimensionMismatchError, PixelGrid};
pub use quantize::{quantize, DEFAULT_PRECISION};
pub use synth::{
    round1, synthesize, synthesize_pixels, synthesize_records, Expression, GraphBounds,
    RectangleRecord, PIXEL_SCALE,
};
