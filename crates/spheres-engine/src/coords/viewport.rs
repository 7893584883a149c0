/// Surface size in pixels.
///
/// The shorter side is the *span*: the scale shared by both axes when a square
/// coordinate system is mapped onto a possibly non-square surface.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Shorter of width and height.
    #[inline]
    pub fn span(self) -> u32 {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_shorter_side() {
        assert_eq!(Viewport::new(800, 600).span(), 600);
        assert_eq!(Viewport::new(300, 500).span(), 300);
        assert_eq!(Viewport::new(600, 600).span(), 600);
    }

    #[test]
    fn zero_side_is_invalid() {
        assert!(!Viewport::new(0, 600).is_valid());
        assert!(!Viewport::new(600, 0).is_valid());
        assert!(Viewport::new(1, 1).is_valid());
    }
}
