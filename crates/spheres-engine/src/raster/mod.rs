//! Software rasterization of flushed frames.
//!
//! Used by test harnesses and the studio to turn a [`Frame`] into pixels that
//! can be written to disk or compared against a reference image. Circles are
//! aliased: a pixel is covered when its center lies inside the shape.

mod diff;

pub use diff::{ImageDiff, compare};

use image::{Rgb, RgbImage};

use crate::coords::Vec2;
use crate::paint::{Rgb16, parse_color_spec};
use crate::scene::Circle;
use crate::surface::Frame;

/// Width of the painted outline ring, in pixels.
pub const OUTLINE_WIDTH: f64 = 1.0;

/// Rasterizes a frame: background first, then every primitive back-to-front.
pub fn rasterize(frame: &Frame) -> RgbImage {
    let background = parse_color_spec(&frame.background).unwrap_or_else(|| {
        log::warn!("unresolvable background {:?}; using black", frame.background);
        Rgb16::BLACK
    });

    let mut image = RgbImage::from_pixel(
        frame.viewport.width,
        frame.viewport.height,
        Rgb(background.to_u8()),
    );

    for circle in &frame.primitives {
        paint_circle(&mut image, circle);
    }

    image
}

fn paint_circle(image: &mut RgbImage, circle: &Circle) {
    if circle.is_invisible() || !circle.center.is_finite() || !circle.radius.is_finite() {
        return;
    }

    let fill = parse_color_spec(&circle.fill);
    let outline = parse_color_spec(&circle.outline);
    if fill.is_none() && outline.is_none() {
        return;
    }

    let r = circle.radius;
    let inner = (r - OUTLINE_WIDTH).max(0.0);

    let Some((x0, x1)) = pixel_range(circle.center.x, r, image.width()) else { return };
    let Some((y0, y1)) = pixel_range(circle.center.y, r, image.height()) else { return };

    for py in y0..y1 {
        for px in x0..x1 {
            let sample = Vec2::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
            let d = sample.distance(circle.center);
            if d > r {
                continue;
            }

            let color = match (outline, fill) {
                (Some(o), _) if d > inner => o,
                (_, Some(f)) => f,
                _ => continue,
            };
            image.put_pixel(px, py, Rgb(color.to_u8()));
        }
    }
}

/// Half-open pixel range covering `[center - r, center + r]`, clipped to `limit`.
fn pixel_range(center: f64, r: f64, limit: u32) -> Option<(u32, u32)> {
    let lo = (center - r).floor().max(0.0);
    let hi = (center + r).ceil().min(f64::from(limit));
    if hi <= lo {
        return None;
    }
    // Both bounds are clipped to [0, limit].
    Some((lo as u32, hi as u32))
}
