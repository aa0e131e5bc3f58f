use crate::color::Rgba;

/// An axis-aligned, uniformly colored block of pixels.
///
/// Coordinates are in flipped-grid pixel space: `x` grows to the right and
/// `y` grows upward from the visual bottom row. `(x, y)` is the anchor cell
/// where growth began, i.e. the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub color: Rgba,
}

impl Rectangle {
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether pixel `(px, py)` lies inside this rectangle.
    #[inline]
    pub fn contains(&self, px: usize, py: usize) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}
