//! Pixel-space to graph-space conversion.

use crate::compress::Rectangle;

/// Graph units per pixel.
pub const PIXEL_SCALE: f64 = 0.1;

/// Round to one decimal place, ties toward positive infinity.
///
/// Half-up matches the rounding existing graph documents were produced
/// with, so `round1(0.05) == 0.1`, `round1(0.15) == 0.2` and
/// `round1(-0.25) == -0.2`. Negative zero is normalised to `0.0` so it never
/// prints as `-0`.
///
/// ```
/// use region_expr::round1;
///
/// assert_eq!(round1(0.05), 0.1);
/// assert_eq!(round1(3.0 * 0.1), 0.3);
/// ```
pub fn round1(value: f64) -> f64 {
    let scaled = value * 10.0;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / 10.0 + 0.0
}

/// Graph-space bounds of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl GraphBounds {
    /// Convert pixel bounds with [`PIXEL_SCALE`] and [`round1`].
    pub fn from_rectangle(rect: &Rectangle) -> Self {
        Self::from_pixels(rect.x, rect.y, rect.width, rect.height)
    }

    pub fn from_pixels(x: usize, y: usize, width: usize, height: usize) -> Self {
        let to_graph = |v: usize| round1(v as f64 * PIXEL_SCALE);
        Self {
            xmin: to_graph(x),
            xmax: to_graph(x + width),
            ymin: to_graph(y),
            ymax: to_graph(y + height),
        }
    }

    /// The region predicate `xmin ≤ x ≤ xmax ∧ ymin ≤ y ≤ ymax` in the
    /// calculator's LaTeX dialect, with the y range as a restriction.
    pub fn to_latex(&self) -> String {
        let GraphBounds {
            xmin,
            xmax,
            ymin,
            ymax,
        } = *self;
        format!("{xmin}\\le x\\le{xmax}\\left\\{{{ymin}\\le y\\le{ymax}\\right\\}}")
    }
}
