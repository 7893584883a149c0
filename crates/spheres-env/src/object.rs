//! Domain-side object model.
//!
//! These are plain values in normalized space. They know nothing about pixels
//! or surfaces; [`crate::Sphere`] projects them onto a surface.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EnvError, Result};

// ── Position ──────────────────────────────────────────────────────────────

/// Position in normalized space. Each axis is nominally in `[-1, 1]`.
///
/// `z` is stored and echoed back but never projected onto the surface.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rejects non-finite coordinates. Out-of-range values are allowed.
    pub fn validated(self) -> Result<Self> {
        if self.x.is_finite() && self.y.is_finite() && self.z.is_finite() {
            Ok(self)
        } else {
            Err(EnvError::InvalidGeometry(format!(
                "position must be finite, got ({}, {}, {})",
                self.x, self.y, self.z
            )))
        }
    }

    /// Builds a position from 2 or 3 values; with 2 values `z` is taken from
    /// `current`.
    pub fn from_values(values: &[f64], current: Position) -> Result<Self> {
        let position = match *values {
            [x, y] => Position::new(x, y, current.z),
            [x, y, z] => Position::new(x, y, z),
            _ => {
                return Err(EnvError::InvalidGeometry(format!(
                    "position needs 2 or 3 coordinates, got {}",
                    values.len()
                )));
            }
        };
        position.validated()
    }
}

impl From<(f64, f64, f64)> for Position {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

// ── Rgba ──────────────────────────────────────────────────────────────────

/// Straight-alpha color with channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Rejects non-finite channels. Range is not checked; encoding clamps.
    pub fn validated(self) -> Result<Self> {
        if [self.r, self.g, self.b, self.a].iter().all(|c| c.is_finite()) {
            Ok(self)
        } else {
            Err(EnvError::InvalidColorSpec(format!(
                "channels must be finite, got ({}, {}, {}, {})",
                self.r, self.g, self.b, self.a
            )))
        }
    }

    /// Parses a JSON color: a 4-element array `[r, g, b, a]` or an object
    /// with exactly the keys `r`, `g`, `b`, `a`.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => {
                let channels = items
                    .iter()
                    .map(|v| {
                        v.as_f64().ok_or_else(|| {
                            EnvError::InvalidColorSpec(format!("non-numeric channel {v}"))
                        })
                    })
                    .collect::<Result<Vec<f64>>>()?;
                Rgba::try_from(channels.as_slice())
            }
            Value::Object(_) => serde_json::from_value::<Rgba>(value.clone())
                .map_err(|e| EnvError::InvalidColorSpec(e.to_string()))?
                .validated(),
            other => Err(EnvError::InvalidColorSpec(format!(
                "expected array or object, got {other}"
            ))),
        }
    }
}

impl TryFrom<&[f64]> for Rgba {
    type Error = EnvError;

    fn try_from(values: &[f64]) -> Result<Self> {
        match *values {
            [r, g, b, a] => Rgba::new(r, g, b, a).validated(),
            _ => Err(EnvError::InvalidColorSpec(format!(
                "color needs 4 channels (r, g, b, a), got {}",
                values.len()
            ))),
        }
    }
}

impl From<(f64, f64, f64, f64)> for Rgba {
    #[inline]
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        Self::new(r, g, b, a)
    }
}

// ── ObjectKind ────────────────────────────────────────────────────────────

/// Kind of object an environment can host.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ObjectKind {
    #[default]
    Sphere,
}

impl ObjectKind {
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Sphere => "sphere",
        }
    }

    /// Properties every object of this kind carries from creation.
    ///
    /// These are the keys of a fresh [`Snapshot`]; `color` is not listed
    /// because it only joins a snapshot once it has been set.
    pub fn properties(self) -> &'static [&'static str] {
        match self {
            ObjectKind::Sphere => &["position", "radius"],
        }
    }
}

// ── DomainObject ──────────────────────────────────────────────────────────

/// Normalized properties of one object; the single source of truth.
///
/// `color` is `None` until set for the first time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DomainObject {
    pub position: Position,
    pub radius: f64,
    pub color: Option<Rgba>,
}

impl DomainObject {
    pub const DEFAULT_RADIUS: f64 = 1.0;
}

impl Default for DomainObject {
    fn default() -> Self {
        Self {
            position: Position::default(),
            radius: Self::DEFAULT_RADIUS,
            color: None,
        }
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────

/// Inspection view of one object's domain properties.
///
/// Serializes as `{"position":{"x":..,"y":..,"z":..},"radius":..}` with a
/// trailing `"color"` entry once a color has been set.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub position: Position,
    pub radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
