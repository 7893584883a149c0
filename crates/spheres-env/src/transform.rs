//! Normalized space to pixel space.
//!
//! Normalized space is square, `[-1, 1]` on each axis, +Y up. It is mapped onto
//! the top-left `span x span` square of the surface, where `span` is the
//! shorter surface side. There is no inverse; normalized values are never
//! reconstructed from pixel measurements.

use spheres_engine::coords::{Vec2, Viewport};

use crate::error::{EnvError, Result};
use crate::object::Position;

/// Projection of normalized geometry onto a surface of known size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateTransform {
    span: f64,
}

impl CoordinateTransform {
    /// Fails with `InvalidGeometry` if either surface side is zero.
    pub fn new(viewport: Viewport) -> Result<Self> {
        if !viewport.is_valid() {
            return Err(EnvError::InvalidGeometry(format!(
                "surface must have positive size, got {}x{}",
                viewport.width, viewport.height
            )));
        }
        Ok(Self {
            span: f64::from(viewport.span()),
        })
    }

    #[inline]
    pub fn span(self) -> f64 {
        self.span
    }

    /// Pixel center for a normalized position. `z` is ignored and values
    /// outside `[-1, 1]` land off-surface.
    #[inline]
    pub fn position_to_pixels(self, position: Position) -> Vec2 {
        Vec2::new(
            (position.x + 1.0) / 2.0 * self.span,
            (-position.y + 1.0) / 2.0 * self.span,
        )
    }

    /// Pixel radius for a normalized radius; `1.0` spans half the shorter side.
    #[inline]
    pub fn radius_to_pixels(self, radius: f64) -> f64 {
        radius * self.span / 2.0
    }
}
