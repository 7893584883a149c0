//! Spheres engine crate.
//!
//! This crate owns the drawing-surface side used by higher layers: pixel-space
//! geometry, surface color strings, stacking order, the [`surface::Surface`]
//! capability and an in-memory retained-mode implementation of it.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;
pub mod surface;
