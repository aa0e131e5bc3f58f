//! Regression tests for the compression pipeline.
//!
//! Each test documents the behavior it pins and what a failure would mean.

#[cfg(test)]
mod domain_tests {
    use crate::color::Rgba;
    use crate::compress::{compress, compress_with, CompressMode, Rectangle};
    use crate::grid::PixelGrid;
    use crate::synth::synthesize;
    use proptest::prelude::*;

    const PALETTE: [Rgba; 4] = [
        Rgba::TRANSPARENT,
        Rgba::opaque(255, 0, 0),
        Rgba::opaque(0, 0, 255),
        Rgba::opaque(0, 0, 0),
    ];

    /// Grids up to 6x6 drawn from `PALETTE`, transparent cells included.
    fn arb_grid() -> impl Strategy<Value = PixelGrid> {
        (1usize..7, 1usize..7).prop_flat_map(|(width, height)| {
            prop::collection::vec(prop::collection::vec(0..PALETTE.len(), width), height)
                .prop_map(|rows| {
                    let rows = rows
                        .into_iter()
                        .map(|row| row.into_iter().map(|i| PALETTE[i]).collect())
                        .collect();
                    PixelGrid::from_rows(rows).unwrap()
                })
        })
    }

    // ========================================================================
    // Legacy output shape
    // ========================================================================

    proptest! {
        /// If this breaks, it means: a rectangle with a zero extent was emitted,
        /// which would synthesize to a degenerate region.
        #[test]
        fn test_every_rectangle_has_positive_extent(grid in arb_grid()) {
            for mode in [CompressMode::Legacy, CompressMode::Exact] {
                for rect in compress_with(&grid, mode) {
                    prop_assert!(rect.width >= 1 && rect.height >= 1, "{:?}", rect);
                    prop_assert!(rect.x + rect.width <= grid.width());
                    prop_assert!(rect.y + rect.height <= grid.height());
                }
            }
        }
    }

    proptest! {
        /// If this breaks, it means: the anchor color no longer comes from the
        /// anchor pixel of the flipped grid.
        #[test]
        fn test_rectangle_color_is_anchor_color(grid in arb_grid()) {
            let flipped = grid.flipped();
            for rect in compress(&grid) {
                prop_assert_eq!(flipped.get(rect.x, rect.y), Some(rect.color));
                prop_assert!(!rect.color.is_empty());
            }
        }
    }

    proptest! {
        /// If this breaks, it means: legacy output order changed. Expression ids
        /// are derived from this order, so documents would no longer diff clean.
        #[test]
        fn test_legacy_order_is_row_major_over_flipped_grid(grid in arb_grid()) {
            let anchors: Vec<_> = compress(&grid).iter().map(|r| (r.y, r.x)).collect();
            let mut sorted = anchors.clone();
            sorted.sort();
            prop_assert_eq!(anchors, sorted);
        }
    }

    /// If this breaks, it means: the lossy single-pixel drop was "fixed" in
    /// legacy mode, changing output for every image with speckle.
    #[test]
    fn test_legacy_drops_isolated_pixels() {
        let c = Rgba::opaque(1, 1, 1);
        let d = Rgba::opaque(2, 2, 2);
        let grid = PixelGrid::from_rows(vec![vec![c, d], vec![d, c]]).unwrap();
        assert!(compress(&grid).is_empty());
    }

    // ========================================================================
    // Exact mode coverage
    // ========================================================================

    proptest! {
        /// If this breaks, it means: exact mode leaves gaps, double-covers a
        /// pixel, or covers a pixel with the wrong color.
        #[test]
        fn test_exact_covers_each_pixel_once(grid in arb_grid()) {
            let flipped = grid.flipped();
            let rects = compress_with(&grid, CompressMode::Exact);

            for y in 0..flipped.height() {
                for x in 0..flipped.width() {
                    let px = flipped.get(x, y).unwrap();
                    let covering: Vec<&Rectangle> =
                        rects.iter().filter(|r| r.contains(x, y)).collect();
                    if px.is_empty() {
                        prop_assert!(covering.is_empty(), "empty pixel ({}, {}) covered", x, y);
                    } else {
                        prop_assert_eq!(covering.len(), 1, "pixel ({}, {}) covered {} times", x, y, covering.len());
                        prop_assert_eq!(covering[0].color, px);
                    }
                }
            }
        }
    }

    proptest! {
        /// If this breaks, it means: exact mode stopped merging, which would
        /// bloat documents by emitting one expression per pixel.
        #[test]
        fn test_exact_never_emits_more_rectangles_than_pixels(grid in arb_grid()) {
            let non_empty = grid.pixels().iter().filter(|px| !px.is_empty()).count();
            prop_assert!(compress_with(&grid, CompressMode::Exact).len() <= non_empty);
        }
    }

    // ========================================================================
    // End to end
    // ========================================================================

    /// If this breaks, it means: the documented 2x2 example no longer
    /// produces the documented expression.
    #[test]
    fn test_solid_two_by_two_end_to_end() {
        let c = Rgba::new(10, 20, 30, 255);
        let grid = PixelGrid::filled(2, 2, c);
        let expected = Rectangle {
            x: 0,
            y: 0,
            width: 2,
            height: 2,
            color: c,
        };

        let exact = compress_with(&grid, CompressMode::Exact);
        assert_eq!(exact, vec![expected]);

        let legacy = compress(&grid);
        assert_eq!(legacy[0], expected);

        let exprs = synthesize(&exact);
        assert_eq!(exprs.len(), 1);
        assert_eq!(exprs[0].id, 0);
        assert_eq!(exprs[0].color, "#0a141e");
        assert_eq!(
            exprs[0].region,
            "0\\le x\\le0.2\\left\\{0\\le y\\le0.2\\right\\}"
        );
    }
}
