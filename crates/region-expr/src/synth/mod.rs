//! Rectangles to calculator region expressions.
//!
//! Each rectangle becomes one [`Expression`] whose `id` is its index in the
//! input. Pixel coordinates map to graph space at [`PIXEL_SCALE`] units per
//! pixel, rounded with [`round1`].

mod coords;
mod expression;

pub use coords::{round1, GraphBounds, PIXEL_SCALE};
pub use expression::{Expression, FILL_OPACITY, LINE_OPACITY, LINE_WIDTH};

use crate::color::{InvalidColorError, Rgba};
use crate::compress::Rectangle;
use crate::grid::PixelGrid;

/// A rectangle whose color has not been validated yet.
///
/// This is the shape rectangles take when they come from outside the crate
/// (deserialized files, other tools): the color is a plain channel list of
/// length 3 or 4.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleRecord {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub color: Vec<f64>,
}

impl TryFrom<&RectangleRecord> for Rectangle {
    type Error = InvalidColorError;

    fn try_from(record: &RectangleRecord) -> Result<Self, Self::Error> {
        Ok(Rectangle {
            x: record.x,
            y: record.y,
            width: record.width,
            height: record.height,
            color: Rgba::from_channels(&record.color)?,
        })
    }
}

impl From<&Rectangle> for RectangleRecord {
    fn from(rect: &Rectangle) -> Self {
        let [r, g, b, a] = rect.color.to_bytes();
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            color: vec![r as f64, g as f64, b as f64, a as f64],
        }
    }
}

fn expression_for(id: usize, rect: &Rectangle) -> Expression {
    Expression::new(
        id,
        rect.color.to_hex(),
        GraphBounds::from_rectangle(rect).to_latex(),
    )
}

/// Turn rectangles into expressions, one per rectangle, ids by position.
///
/// # Example
///
/// ```
/// use region_expr::{synthesize, Rectangle, Rgba};
///
/// let rect = Rectangle { x: 0, y: 0, width: 2, height: 2, color: Rgba::opaque(10, 20, 30) };
/// let exprs = synthesize(&[rect]);
///
/// assert_eq!(exprs[0].id, 0);
/// assert_eq!(exprs[0].color, "#0a141e");
/// assert_eq!(exprs[0].region, "0\\le x\\le0.2\\left\\{0\\le y\\le0.2\\right\\}");
/// ```
pub fn synthesize(rectangles: &[Rectangle]) -> Vec<Expression> {
    rectangles
        .iter()
        .enumerate()
        .map(|(id, rect)| expression_for(id, rect))
        .collect()
}

/// Like [`synthesize`], but validates raw colors first.
///
/// Fails on the first invalid color; no expressions are returned in that case.
pub fn synthesize_records(records: &[RectangleRecord]) -> Result<Vec<Expression>, InvalidColorError> {
    let rectangles = records
        .iter()
        .map(Rectangle::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(synthesize(&rectangles))
}

/// One expression per non-empty pixel, without any compression.
///
/// Pixels are visited in the same flipped row-major order the compressor
/// uses; ids count emitted expressions, so skipped empty pixels leave no gaps.
pub fn synthesize_pixels(grid: &PixelGrid) -> Vec<Expression> {
    let flipped = grid.flipped();
    let mut expressions = Vec::new();

    for (y, row) in flipped.rows().enumerate() {
        for (x, &color) in row.iter().enumerate() {
            if color.is_empty() {
                continue;
            }
            let cell = Rectangle {
                x,
                y,
                width: 1,
                height: 1,
                color,
            };
            expressions.push(expression_for(expressions.len(), &cell));
        }
    }

    expressions
}
