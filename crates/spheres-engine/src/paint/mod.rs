//! Surface color model.
//!
//! Scope:
//! - the surface's native color representation (16-bit per channel, opaque)
//! - parsing of the color strings stored on primitives (`fill`, `outline`)
//!
//! The surface has no alpha channel. An empty color string means "not painted".

pub mod color;
pub mod spec;

pub use color::Rgb16;
pub use spec::parse_color_spec;
