//! Drawing-surface capability.
//!
//! A surface hosts circle primitives addressed by [`ItemId`], lets callers
//! set and read their properties, restack and remove them, and realizes all
//! pending mutations as a visible frame on [`Surface::flush`].
//!
//! Mutations are write-buffered: nothing becomes observable as a rendered frame
//! until the next flush.

mod canvas;
mod error;
mod frame;
mod property;

pub use canvas::{Canvas, CanvasConfig};
pub use error::SurfaceError;
pub use frame::Frame;
pub use property::{ItemProperty, PropertyName};

pub use crate::scene::ItemId;

use crate::coords::Viewport;
use crate::paint::Rgb16;

/// Capability consumed by adapters that render onto a pixel surface.
pub trait Surface {
    /// Creates a circle with zero radius and no fill or outline, stacked above
    /// every existing primitive.
    fn create_circle(&mut self) -> ItemId;

    /// Writes a single property of a primitive.
    fn set_property(&mut self, item: ItemId, value: ItemProperty) -> Result<(), SurfaceError>;

    /// Reads the current (possibly not yet flushed) value of a property.
    fn property(&self, item: ItemId, name: PropertyName) -> Result<ItemProperty, SurfaceError>;

    /// Moves a primitive to the top of the stacking order.
    fn raise(&mut self, item: ItemId) -> Result<(), SurfaceError>;

    /// Removes a primitive. The handle is invalid afterwards.
    fn remove(&mut self, item: ItemId) -> Result<(), SurfaceError>;

    /// Surface size in pixels.
    fn dimensions(&self) -> Viewport;

    /// Resolves a color string to the surface's native representation.
    ///
    /// Returns `None` for the empty string and for unknown colors.
    fn resolve_color(&self, spec: &str) -> Option<Rgb16>;

    /// Realizes all pending mutations as one rendered frame.
    fn flush(&mut self);
}
