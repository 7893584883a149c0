use crate::coords::Viewport;
use crate::scene::Circle;

/// A rendered frame: the primitives visible after a flush, back-to-front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Monotonic flush counter, starting at 1 for the first flush.
    pub index: u64,
    pub viewport: Viewport,
    /// Background color string.
    pub background: String,
    /// Primitives in paint order (first is furthest back).
    pub primitives: Vec<Circle>,
}

impl Frame {
    /// Compares rendered content, ignoring the frame index.
    pub fn same_content(&self, other: &Frame) -> bool {
        self.viewport == other.viewport
            && self.background == other.background
            && self.primitives == other.primitives
    }
}
