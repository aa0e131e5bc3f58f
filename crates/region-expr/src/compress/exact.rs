//! Non-overlapping greedy decomposition.

use super::Rectangle;
use crate::grid::PixelGrid;

/// Scan an already flipped grid, covering every non-empty pixel exactly once.
///
/// Covered cells never anchor and never join a later rectangle. Height grows
/// only while the whole width span of the next row matches, so every
/// rectangle is uniformly colored. Isolated pixels become 1x1 rectangles.
pub(super) fn scan(grid: &PixelGrid) -> Vec<Rectangle> {
    let (w, h) = (grid.width(), grid.height());
    let mut covered = vec![false; w * h];
    let mut rectangles = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let color = grid.row(y)[x];
            if covered[y * w + x] || color.is_empty() {
                continue;
            }

            let free_match = |cx: usize, cy: usize, covered: &[bool]| {
                !covered[cy * w + cx] && grid.row(cy)[cx] == color
            };

            let width = (x..w)
                .take_while(|&cx| free_match(cx, y, &covered))
                .count();
            let height = 1 + (y + 1..h)
                .take_while(|&cy| (x..x + width).all(|cx| free_match(cx, cy, &covered)))
                .count();

            for cy in y..y + height {
                covered[cy * w + x..cy * w + x + width].fill(true);
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
