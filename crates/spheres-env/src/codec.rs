//! Normalized RGBA to surface color strings and back.
//!
//! The surface has no alpha channel. Alpha is binarized into a show/hide
//! toggle: any positive alpha paints fill and outline with the same opaque
//! `#RRGGBB` string, zero alpha clears both to the empty string.

use spheres_engine::paint::Rgb16;
use spheres_engine::surface::Surface;

use crate::error::{EnvError, Result};
use crate::object::Rgba;

/// Surface color string for `color`. Empty when `color.a <= 0`.
///
/// RGB channels are clamped to `[0, 1]`, scaled by 255 and rounded to the
/// nearest integer (ties to even).
pub fn encode(color: Rgba) -> String {
    if color.a > 0.0 {
        let [r, g, b] = [color.r, color.g, color.b].map(to_byte);
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        String::new()
    }
}

fn to_byte(channel: f64) -> u8 {
    // Clamped into [0, 255] before the cast.
    (255.0 * channel.clamp(0.0, 1.0)).round_ties_even() as u8
}

/// Normalized color for a primitive's `fill` and `outline` strings.
///
/// An unpainted primitive decodes to transparent black. Otherwise each
/// channel is the surface's raw intensity divided by the raw intensity of
/// white on the same surface, and alpha is `1.0`.
///
/// Fails with `InconsistentRenderState` if fill and outline differ and with
/// `UnresolvedColor` if the surface cannot resolve the fill; both mean the
/// primitive was edited outside the adapter.
pub fn decode<S: Surface + ?Sized>(surface: &S, fill: &str, outline: &str) -> Result<Rgba> {
    if fill != outline {
        log::error!("render invariant broken: fill {fill:?} != outline {outline:?}");
        return Err(EnvError::InconsistentRenderState {
            fill: fill.to_string(),
            outline: outline.to_string(),
        });
    }

    if fill.is_empty() {
        return Ok(Rgba::TRANSPARENT);
    }

    let color = resolve(surface, fill)?;
    let white = resolve(surface, "white")?;

    let [r, g, b] = [
        (color.r, white.r),
        (color.g, white.g),
        (color.b, white.b),
    ]
    .map(|(c, w)| f64::from(c) / f64::from(w));

    Ok(Rgba::new(r, g, b, 1.0))
}

fn resolve<S: Surface + ?Sized>(surface: &S, spec: &str) -> Result<Rgb16> {
    surface.resolve_color(spec).ok_or_else(|| {
        log::error!("surface cannot resolve color {spec:?}");
        EnvError::UnresolvedColor(spec.to_string())
    })
}
