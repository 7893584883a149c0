use crate::coords::Vec2;

/// Name of a primitive property, used for reads.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PropertyName {
    Fill,
    Outline,
    Center,
    Radius,
}

/// A primitive property together with its value.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemProperty {
    /// Interior color string; empty means unpainted.
    Fill(String),
    /// Edge color string; empty means unpainted.
    Outline(String),
    /// Center in pixels.
    Center(Vec2),
    /// Radius in pixels.
    Radius(f64),
}

impl ItemProperty {
    /// The color string carried by `Fill` / `Outline`.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            ItemProperty::Fill(s) | ItemProperty::Outline(s) => Some(s),
            _ => None,
        }
    }
}
