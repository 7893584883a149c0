//! Object registry on top of a single shared surface.

use core::fmt;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use spheres_engine::coords::Viewport;
use spheres_engine::surface::{Canvas, Surface};

use crate::config::EnvironmentConfig;
use crate::error::{EnvError, Result};
use crate::object::{ObjectKind, Snapshot};
use crate::sphere::{SharedSurface, Sphere};

/// Keyed collection of rendered objects sharing one surface.
///
/// Objects are kept in insertion order, which is also their default stacking
/// order. A key names at most one live object; once destroyed, the key can be
/// reused for a new, independent object.
///
/// Object mutations are buffered by the surface until [`update`](Self::update)
/// flushes them as one frame.
///
/// Dropping the environment (or calling [`teardown`](Self::teardown)) removes
/// every remaining primitive, then releases the surface.
///
/// ```rust
/// use spheres_env::{Environment, Rgba};
///
/// let mut env = Environment::new();
/// let sphere = env.initialize_object("sphere")?;
/// sphere.set_color(Rgba::rgb(1.0, 0.0, 0.0))?;
/// sphere.set_radius(0.2)?;
/// env.update();
///
/// assert_eq!(env.keys().collect::<Vec<_>>(), ["sphere"]);
/// # Ok::<(), spheres_env::EnvError>(())
/// ```
pub struct Environment<S: Surface = Canvas> {
    surface: SharedSurface<S>,
    objects: Vec<Sphere<S>>,
}

impl Environment<Canvas> {
    /// Environment on a default 600x600 black canvas.
    pub fn new() -> Self {
        let config = EnvironmentConfig::default();
        Self::from_shared(Rc::new(RefCell::new(Canvas::new(config.canvas_config()))))
    }

    /// Environment on a canvas built from `config`.
    ///
    /// Fails with `InvalidGeometry` if either dimension is zero.
    pub fn with_config(config: EnvironmentConfig) -> Result<Self> {
        Self::with_surface(Canvas::new(config.canvas_config()))
    }
}

impl Default for Environment<Canvas> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Environment<S> {
    /// Environment on a caller-provided surface.
    ///
    /// Fails with `InvalidGeometry` if the surface has a zero dimension.
    pub fn with_surface(surface: S) -> Result<Self> {
        let viewport = surface.dimensions();
        if !viewport.is_valid() {
            return Err(EnvError::InvalidGeometry(format!(
                "surface must have positive size, got {}x{}",
                viewport.width, viewport.height
            )));
        }
        Ok(Self::from_shared(Rc::new(RefCell::new(surface))))
    }

    fn from_shared(surface: SharedSurface<S>) -> Self {
        Self {
            surface,
            objects: Vec::new(),
        }
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Creates a sphere with default properties under `key`.
    pub fn initialize_object(&mut self, key: impl Into<String>) -> Result<&mut Sphere<S>> {
        self.initialize_object_of(key, ObjectKind::default())
    }

    /// Creates an object of `kind` under `key`.
    ///
    /// Fails with `DuplicateKey` if `key` names a live object; the existing
    /// object is left untouched.
    pub fn initialize_object_of(
        &mut self,
        key: impl Into<String>,
        kind: ObjectKind,
    ) -> Result<&mut Sphere<S>> {
        let key = key.into();
        if self.contains_key(&key) {
            return Err(EnvError::DuplicateKey(key));
        }

        let sphere = Sphere::new(key, kind, Rc::clone(&self.surface))?;
        log::debug!("initialized {} {:?} as {}", kind.name(), sphere.key(), sphere.item());

        self.objects.push(sphere);
        let index = self.objects.len() - 1;
        Ok(&mut self.objects[index])
    }

    /// Destroys the object under `key`, removing its primitive before
    /// returning.
    pub fn destroy_object(&mut self, key: &str) -> Result<()> {
        let index = self.index_of(key)?;
        let sphere = self.objects.remove(index);
        sphere.destroy();
        log::debug!("destroyed {key:?}");
        Ok(())
    }

    /// Destroys every object, then releases this handle on the surface.
    pub fn teardown(mut self) {
        self.release_objects();
    }

    fn release_objects(&mut self) {
        if self.objects.is_empty() {
            return;
        }
        let count = self.objects.len();
        // Newest first; `drain` would release oldest first.
        while let Some(sphere) = self.objects.pop() {
            sphere.destroy();
        }
        log::debug!("teardown: released {count} objects");
    }

    // ── access ────────────────────────────────────────────────────────────

    pub fn get(&self, key: &str) -> Result<&Sphere<S>> {
        let index = self.index_of(key)?;
        Ok(&self.objects[index])
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Sphere<S>> {
        let index = self.index_of(key)?;
        Ok(&mut self.objects[index])
    }

    /// Domain properties of the object under `key`.
    pub fn snapshot(&self, key: &str) -> Result<Snapshot> {
        self.get(key)?.snapshot()
    }

    /// Domain properties of every object, in insertion order.
    pub fn snapshot_all(&self) -> Result<EnvironmentSnapshot> {
        let entries = self
            .objects
            .iter()
            .map(|sphere| Ok((sphere.key().to_string(), sphere.snapshot()?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(EnvironmentSnapshot { entries })
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.objects.iter().any(|sphere| sphere.key() == key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Keys in insertion order. Each call reflects current contents.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|sphere| sphere.key())
    }

    /// Objects in insertion order. Each call reflects current contents.
    pub fn iter(&self) -> impl Iterator<Item = &Sphere<S>> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Sphere<S>> {
        self.objects.iter_mut()
    }

    fn index_of(&self, key: &str) -> Result<usize> {
        self.objects
            .iter()
            .position(|sphere| sphere.key() == key)
            .ok_or_else(|| EnvError::KeyNotFound(key.to_string()))
    }

    // ── surface ───────────────────────────────────────────────────────────

    /// Flushes every mutation made since the previous update as one frame.
    pub fn update(&mut self) {
        self.surface.borrow_mut().flush();
        log::debug!("update: flushed {} objects", self.objects.len());
    }

    /// Surface size in pixels.
    pub fn dimensions(&self) -> Viewport {
        self.surface.borrow().dimensions()
    }

    /// Read access to the surface, e.g. to inspect the last flushed frame.
    pub fn surface(&self) -> Ref<'_, S> {
        self.surface.borrow()
    }

    /// Direct mutable access to the surface.
    ///
    /// Edits made here bypass the adapter; breaking the fill/outline
    /// invariant makes [`Sphere::color`] fail.
    pub fn with_surface_mut<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut surface = self.surface.borrow_mut();
        f(&mut *surface)
    }
}

impl<S: Surface> Drop for Environment<S> {
    fn drop(&mut self) {
        self.release_objects();
    }
}

impl<'a, S: Surface> IntoIterator for &'a Environment<S> {
    type Item = &'a Sphere<S>;
    type IntoIter = core::slice::Iter<'a, Sphere<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl<S: Surface> fmt::Debug for Environment<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("objects", &self.objects)
            .finish_non_exhaustive()
    }
}

// ── EnvironmentSnapshot ───────────────────────────────────────────────────

/// Snapshots of every object keyed by name, in insertion order.
///
/// Serializes as a JSON object; an empty environment is `{}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentSnapshot {
    pub entries: Vec<(String, Snapshot)>,
}

impl EnvironmentSnapshot {
    pub fn get(&self, key: &str) -> Option<&Snapshot> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, snapshot)| snapshot)
    }
}

impl Serialize for EnvironmentSnapshot {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, snapshot) in &self.entries {
            map.serialize_entry(key, snapshot)?;
        }
        map.end()
    }
}

impl fmt::Display for EnvironmentSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
