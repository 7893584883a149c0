use crate::coords::Viewport;
use crate::paint::{Rgb16, parse_color_spec};
use crate::scene::{Circle, ItemId, StackList};

use super::{Frame, ItemProperty, PropertyName, Surface, SurfaceError};

/// Canvas configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Background color string painted beneath every primitive.
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            background: "black".to_string(),
        }
    }
}

/// In-memory retained-mode surface.
///
/// Primitive mutations apply to the retained scene immediately and are
/// readable through [`Surface::property`], but the rendered output only
/// changes on [`Surface::flush`], which captures the scene as a [`Frame`].
#[derive(Debug)]
pub struct Canvas {
    viewport: Viewport,
    background: String,
    scene: StackList,
    frame: Option<Frame>,
    flushes: u64,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Self {
        log::debug!(
            "canvas created: {}x{} background={:?}",
            config.width,
            config.height,
            config.background
        );
        Self {
            viewport: Viewport::new(config.width, config.height),
            background: config.background,
            scene: StackList::new(),
            frame: None,
            flushes: 0,
        }
    }

    #[inline]
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Most recently flushed frame, `None` before the first flush.
    #[inline]
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Number of flushes performed so far.
    #[inline]
    pub fn flush_count(&self) -> u64 {
        self.flushes
    }

    /// Number of live primitives (flushed or not).
    #[inline]
    pub fn item_count(&self) -> usize {
        self.scene.len()
    }

    /// Current retained state of a primitive.
    pub fn item(&self, id: ItemId) -> Option<&Circle> {
        self.scene.get(id).map(|item| &item.circle)
    }

    /// Handles of live primitives, back-to-front.
    pub fn stacking_order(&mut self) -> Vec<ItemId> {
        self.scene.iter_in_paint_order().map(|item| item.id).collect()
    }

    fn circle_mut(&mut self, id: ItemId) -> Result<&mut Circle, SurfaceError> {
        self.scene.get_mut(id).ok_or(SurfaceError::UnknownItem(id))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl Surface for Canvas {
    fn create_circle(&mut self) -> ItemId {
        let id = self.scene.insert(Circle::default());
        log::trace!("canvas: created {id}");
        id
    }

    fn set_property(&mut self, item: ItemId, value: ItemProperty) -> Result<(), SurfaceError> {
        let circle = self.circle_mut(item)?;
        match value {
            ItemProperty::Fill(s) => circle.fill = s,
            ItemProperty::Outline(s) => circle.outline = s,
            ItemProperty::Center(p) => circle.center = p,
            ItemProperty::Radius(r) => circle.radius = r,
        }
        Ok(())
    }

    fn property(&self, item: ItemId, name: PropertyName) -> Result<ItemProperty, SurfaceError> {
        let circle = self.item(item).ok_or(SurfaceError::UnknownItem(item))?;
        Ok(match name {
            PropertyName::Fill => ItemProperty::Fill(circle.fill.clone()),
            PropertyName::Outline => ItemProperty::Outline(circle.outline.clone()),
            PropertyName::Center => ItemProperty::Center(circle.center),
            PropertyName::Radius => ItemProperty::Radius(circle.radius),
        })
    }

    fn raise(&mut self, item: ItemId) -> Result<(), SurfaceError> {
        if self.scene.raise(item) {
            Ok(())
        } else {
            Err(SurfaceError::UnknownItem(item))
        }
    }

    fn remove(&mut self, item: ItemId) -> Result<(), SurfaceError> {
        self.scene
            .remove(item)
            .map(|_| log::trace!("canvas: removed {item}"))
            .ok_or(SurfaceError::UnknownItem(item))
    }

    fn dimensions(&self) -> Viewport {
        self.viewport
    }

    fn resolve_color(&self, spec: &str) -> Option<Rgb16> {
        parse_color_spec(spec)
    }

    fn flush(&mut self) {
        self.flushes = self.flushes.wrapping_add(1);

        let primitives = self
            .scene
            .iter_in_paint_order()
            .map(|item| item.circle.clone())
            .collect();

        self.frame = Some(Frame {
            index: self.flushes,
            viewport: self.viewport,
            background: self.background.clone(),
            primitives,
        });

        log::trace!("canvas: flushed frame {}", self.flushes);
    }
}
