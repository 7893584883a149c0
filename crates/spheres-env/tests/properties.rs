//! Properties that must hold for all inputs.

use proptest::prelude::*;

use spheres_engine::surface::Canvas;
use spheres_env::{Environment, EnvironmentConfig, Position, Rgba, codec};

/// Half a quantization step, plus slack for float rounding.
const COLOR_TOLERANCE: f64 = 0.5 / 255.0 + 1e-12;

fn unit() -> impl Strategy<Value = f64> {
    -1.0f64..=1.0
}

fn channel() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

proptest! {
    #[test]
    fn stored_position_round_trips_exactly(x in unit(), y in unit(), z in unit()) {
        let mut env = Environment::new();
        let sphere = env.initialize_object("s").unwrap();
        for _ in 0..3 {
            sphere.set_position((x, y, z)).unwrap();
            let p = sphere.position();
            sphere.set_position(p).unwrap();
        }
        prop_assert_eq!(sphere.position(), Position::new(x, y, z));
    }

    #[test]
    fn projected_center_is_within_surface(x in unit(), y in unit(), side in 1u32..2000) {
        let mut env = Environment::with_config(EnvironmentConfig::new().size(side, side + 7)).unwrap();
        let item = {
            let sphere = env.initialize_object("s").unwrap();
            sphere.set_position((x, y, 0.0)).unwrap();
            sphere.item()
        };
        let span = f64::from(side);
        let center = env.surface().item(item).unwrap().center;
        prop_assert!((0.0..=span).contains(&center.x));
        prop_assert!((0.0..=span).contains(&center.y));
    }

    #[test]
    fn pixel_radius_is_exact(r in 1e-6f64..10.0, side in 1u32..2000) {
        let mut env = Environment::with_config(EnvironmentConfig::new().size(side + 3, side)).unwrap();
        let sphere = env.initialize_object("s").unwrap();
        sphere.set_position((0.1, -0.2, 0.3)).unwrap();
        sphere.set_color(Rgba::rgb(0.5, 0.25, 1.0)).unwrap();
        let color = sphere.color().unwrap();

        sphere.set_radius(r).unwrap();

        prop_assert_eq!(sphere.radius(), r);
        prop_assert_eq!(sphere.position(), Position::new(0.1, -0.2, 0.3));
        prop_assert_eq!(sphere.color().unwrap(), color);

        let item = sphere.item();
        let pixels = env.surface().item(item).unwrap().radius;
        prop_assert_eq!(pixels, r * f64::from(side) / 2.0);
    }

    #[test]
    fn visible_color_round_trips_within_a_step(r in channel(), g in channel(), b in channel()) {
        let encoded = codec::encode(Rgba::rgb(r, g, b));
        let decoded = codec::decode(&Canvas::default(), &encoded, &encoded).unwrap();
        prop_assert!((decoded.r - r).abs() <= COLOR_TOLERANCE);
        prop_assert!((decoded.g - g).abs() <= COLOR_TOLERANCE);
        prop_assert!((decoded.b - b).abs() <= COLOR_TOLERANCE);
        prop_assert_eq!(decoded.a, 1.0);
    }

    #[test]
    fn zero_alpha_always_decodes_transparent(r in channel(), g in channel(), b in channel()) {
        let mut env = Environment::new();
        let sphere = env.initialize_object("s").unwrap();
        sphere.set_color(Rgba::rgb(r, g, b)).unwrap();
        sphere.set_color(Rgba::new(r, g, b, 0.0)).unwrap();
        prop_assert_eq!(sphere.color().unwrap(), Rgba::TRANSPARENT);
    }

    #[test]
    fn encoded_color_is_uppercase_hex(r in -1.0f64..2.0, g in -1.0f64..2.0, b in -1.0f64..2.0) {
        let encoded = codec::encode(Rgba::rgb(r, g, b));
        prop_assert_eq!(encoded.len(), 7);
        prop_assert!(encoded.starts_with('#'));
        prop_assert!(encoded[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }
}
