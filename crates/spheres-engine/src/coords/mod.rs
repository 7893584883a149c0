//! Pixel-space geometry shared by surfaces, rasterizers and adapters.
//!
//! Canonical surface space:
//! - Pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Adapters that work in another space (normalized, world, ...) convert into
//! this one before touching a surface.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
