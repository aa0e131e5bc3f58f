/// Fill opacity written on every expression.
pub const FILL_OPACITY: &str = "1";
/// Outline opacity written on every expression.
pub const LINE_OPACITY: &str = "1";
/// Outline width written on every expression.
pub const LINE_WIDTH: &str = "2";

/// One calculator expression: a filled, colored region.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Position of the source rectangle in the compressed sequence.
    pub id: usize,
    /// `#rrggbb`, lowercase.
    pub color: String,
    /// Region predicate in the calculator's LaTeX dialect.
    pub region: String,
    pub fill_opacity: &'static str,
    pub line_opacity: &'static str,
    pub line_width: &'static str,
}

impl Expression {
    pub fn new(id: usize, color: String, region: String) -> Self {
        Self {
            id,
            color,
            region,
            fill_opacity: FILL_OPACITY,
            line_opacity: LINE_OPACITY,
            line_width: LINE_WIDTH,
        }
    }
}
