//! Single-direction greedy growth without coverage bookkeeping.

use super::Rectangle;
use crate::color::Rgba;
use crate::grid::PixelGrid;

#[inline]
fn extends(pixel: Rgba, color: Rgba) -> bool {
    !pixel.is_empty() && pixel == color
}

/// Scan an already flipped grid.
///
/// Width grows along the anchor row, height along the anchor column only, so
/// the rectangle can claim cells that do not match (gaps) and later anchors
/// re-scan cells an earlier rectangle already covered (overlap). Runs of a
/// single cell in both directions are dropped.
pub(super) fn scan(grid: &PixelGrid) -> Vec<Rectangle> {
    let mut rectangles = Vec::new();

    for y in 0..grid.height() {
        let row = grid.row(y);
        for (x, &color) in row.iter().enumerate() {
            if color.is_empty() {
                continue;
            }

            let width = row[x..]
                .iter()
                .take_while(|&&px| extends(px, color))
                .count();
            let height = (y..grid.height())
                .take_while(|&cy| extends(grid.row(cy)[x], color))
                .count();

            if width == 1 && height == 1 {
                continue;
            }

            rectangles.push(Rectangle {
                x,
                y,
                width,
                height,
                color,
            });
        }
    }

    rectangles
}
