//! A domain object coupled to one surface primitive.

use std::cell::RefCell;
use std::rc::Rc;

use spheres_engine::surface::{ItemId, ItemProperty, PropertyName, Surface};

use crate::codec;
use crate::error::{EnvError, Result};
use crate::object::{DomainObject, ObjectKind, Position, Rgba, Snapshot};
use crate::transform::CoordinateTransform;

/// Surface handle shared by an environment and the objects it hosts.
pub type SharedSurface<S> = Rc<RefCell<S>>;

/// A sphere rendered as a circle on a shared surface.
///
/// The normalized [`DomainObject`] is the source of truth. Every setter
/// validates its input, writes the projected value to the primitive and only
/// then commits the normalized value, so a rejected call leaves both sides
/// untouched. Getters for position and radius return the stored normalized
/// values; pixel state is never read back for them.
///
/// Setters do not flush the surface. Dropping a `Sphere` removes its primitive.
pub struct Sphere<S: Surface> {
    key: String,
    kind: ObjectKind,
    object: DomainObject,
    item: ItemId,
    surface: SharedSurface<S>,
}

impl<S: Surface> Sphere<S> {
    /// Creates the primitive and projects the default domain values onto it.
    pub(crate) fn new(key: String, kind: ObjectKind, surface: SharedSurface<S>) -> Result<Self> {
        let item = surface.borrow_mut().create_circle();

        // From here on, Drop removes the primitive if initialization fails.
        let mut sphere = Self {
            key,
            kind,
            object: DomainObject::default(),
            item,
            surface,
        };

        let defaults = DomainObject::default();
        sphere.set_position(defaults.position)?;
        sphere.set_radius(defaults.radius)?;
        sphere.write_color(String::new())?;

        Ok(sphere)
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Handle of the primitive this sphere renders to.
    #[inline]
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Stored normalized properties.
    #[inline]
    pub fn object(&self) -> &DomainObject {
        &self.object
    }

    // ── position ──────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Position {
        self.object.position
    }

    pub fn set_position(&mut self, position: impl Into<Position>) -> Result<()> {
        let position = position.into().validated()?;
        let center = self.transform()?.position_to_pixels(position);
        self.write(ItemProperty::Center(center))?;
        self.object.position = position;
        Ok(())
    }

    /// Moves in the view plane, keeping the stored `z`.
    pub fn set_position_xy(&mut self, x: f64, y: f64) -> Result<()> {
        self.set_position(Position::new(x, y, self.object.position.z))
    }

    /// Sets position from 2 (`x, y`, keeps `z`) or 3 coordinates.
    pub fn set_position_values(&mut self, values: &[f64]) -> Result<()> {
        let position = Position::from_values(values, self.object.position)?;
        self.set_position(position)
    }

    // ── radius ────────────────────────────────────────────────────────────

    #[inline]
    pub fn radius(&self) -> f64 {
        self.object.radius
    }

    /// Fails with `InvalidGeometry` unless `radius` is finite and positive.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(EnvError::InvalidGeometry(format!(
                "radius must be positive and finite, got {radius}"
            )));
        }
        let pixels = self.transform()?.radius_to_pixels(radius);
        self.write(ItemProperty::Radius(pixels))?;
        self.object.radius = radius;
        Ok(())
    }

    // ── color ─────────────────────────────────────────────────────────────

    /// Color decoded from the primitive's current fill and outline.
    ///
    /// Transparent black until a visible color has been set.
    pub fn color(&self) -> Result<Rgba> {
        let surface = self.surface.borrow();
        let fill = surface.property(self.item, PropertyName::Fill)?;
        let outline = surface.property(self.item, PropertyName::Outline)?;
        codec::decode(
            &*surface,
            fill.as_color().unwrap_or_default(),
            outline.as_color().unwrap_or_default(),
        )
    }

    pub fn set_color(&mut self, color: impl Into<Rgba>) -> Result<()> {
        let color = color.into().validated()?;
        self.write_color(codec::encode(color))?;
        self.object.color = Some(color);
        Ok(())
    }

    /// Sets color from a dynamic channel list; exactly 4 values are required.
    pub fn set_color_values(&mut self, values: &[f64]) -> Result<()> {
        let color = Rgba::try_from(values)?;
        self.set_color(color)
    }

    fn write_color(&mut self, spec: String) -> Result<()> {
        self.write(ItemProperty::Fill(spec.clone()))?;
        self.write(ItemProperty::Outline(spec))
    }

    // ── stacking ──────────────────────────────────────────────────────────

    /// Stacks the primitive above every other primitive on the surface.
    pub fn raise_to_front(&mut self) -> Result<()> {
        self.surface.borrow_mut().raise(self.item)?;
        Ok(())
    }

    // ── inspection ────────────────────────────────────────────────────────

    /// Domain properties; `color` is present once a color has been set.
    pub fn snapshot(&self) -> Result<Snapshot> {
        let color = match self.object.color {
            Some(_) => Some(self.color()?),
            None => None,
        };
        Ok(Snapshot {
            position: self.object.position,
            radius: self.object.radius,
            color,
        })
    }

    /// Removes the primitive now. Equivalent to dropping the sphere.
    pub fn destroy(self) {
        drop(self);
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn transform(&self) -> Result<CoordinateTransform> {
        CoordinateTransform::new(self.surface.borrow().dimensions())
    }

    fn write(&mut self, value: ItemProperty) -> Result<()> {
        self.surface.borrow_mut().set_property(self.item, value)?;
        Ok(())
    }
}

impl<S: Surface> Drop for Sphere<S> {
    fn drop(&mut self) {
        let Ok(mut surface) = self.surface.try_borrow_mut() else {
            log::error!("{:?}: surface busy, {} not removed", self.key, self.item);
            return;
        };
        match surface.remove(self.item) {
            Ok(()) => log::debug!("{:?}: removed {}", self.key, self.item),
            Err(err) => log::warn!("{:?}: {err}", self.key),
        }
    }
}

impl<S: Surface> core::fmt::Debug for Sphere<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sphere")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("object", &self.object)
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}
