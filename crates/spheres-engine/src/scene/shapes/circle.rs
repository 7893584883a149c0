use crate::coords::Vec2;

/// Circle primitive in surface pixels.
///
/// `fill` and `outline` hold surface color strings; an empty string means the
/// corresponding part is not painted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
    pub fill: String,
    pub outline: String,
}

impl Circle {
    /// True when nothing of this circle would be painted.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.radius <= 0.0 || (self.fill.is_empty() && self.outline.is_empty())
    }
}
