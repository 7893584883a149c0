//! Spheres environment rendered on a 2D drawing surface.
//!
//! Objects live in a normalized 3D space (`[-1, 1]` per axis, +Y up) and are
//! drawn as circles on a pixel-addressed [`Surface`]. The z axis is stored but
//! not projected.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`transform`] | `CoordinateTransform`: normalized position/radius to pixels |
//! | [`codec`] | `encode` / `decode` between `Rgba` and surface color strings |
//! | [`object`] | `Position`, `Rgba`, `DomainObject`, `Snapshot`, `ObjectKind` |
//! | [`sphere`] | `Sphere`: one domain object bound to one primitive |
//! | [`environment`] | `Environment`: keyed registry and explicit flush |
//!
//! # Quick start
//!
//! ```rust
//! use spheres_env::{Environment, Rgba};
//!
//! let mut env = Environment::new();
//!
//! let a = env.initialize_object("a")?;
//! a.set_color(Rgba::rgb(0.0, 0.0, 1.0))?;
//! a.set_radius(0.20)?;
//! a.set_position((0.50, -0.55, 1.00))?;
//!
//! env.update();
//!
//! let surface = env.surface();
//! let circle = &surface.frame().unwrap().primitives[0];
//! assert_eq!(circle.fill, "#0000FF");
//! # Ok::<(), spheres_env::EnvError>(())
//! ```
//!
//! [`Surface`]: spheres_engine::surface::Surface

pub mod codec;
pub mod config;
pub mod environment;
pub mod error;
pub mod object;
pub mod sphere;
pub mod transform;

pub use config::EnvironmentConfig;
pub use environment::{Environment, EnvironmentSnapshot};
pub use error::{EnvError, Result};
pub use object::{DomainObject, ObjectKind, Position, Rgba, Snapshot};
pub use sphere::{SharedSurface, Sphere};
pub use transform::CoordinateTransform;
