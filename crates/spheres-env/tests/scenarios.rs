//! End-to-end behaviour of an environment on the in-memory canvas.

use spheres_engine::coords::Vec2;
use spheres_engine::surface::{ItemId, ItemProperty};
use spheres_env::{EnvError, Environment, Position, Rgba};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn paint_order(env: &mut Environment) -> Vec<ItemId> {
    env.with_surface_mut(|canvas| canvas.stacking_order())
}

#[test_log::test]
fn reference_object_is_projected() {
    let mut env = Environment::new();
    let a = env.initialize_object("a").unwrap();
    a.set_color(Rgba::rgb(0.0, 0.0, 1.0)).unwrap();
    a.set_radius(0.20).unwrap();
    a.set_position((0.50, -0.55, 1.00)).unwrap();
    let item = a.item();

    let snapshot = env.snapshot("a").unwrap();
    assert_eq!(snapshot.position, Position::new(0.5, -0.55, 1.0));
    assert_eq!(snapshot.radius, 0.2);
    assert_eq!(snapshot.color, Some(Rgba::new(0.0, 0.0, 1.0, 1.0)));

    let surface = env.surface();
    let circle = surface.item(item).unwrap();
    assert!(approx(circle.center.x, 450.0), "{:?}", circle.center);
    assert!(approx(circle.center.y, 465.0), "{:?}", circle.center);
    assert!(approx(circle.radius, 60.0), "{}", circle.radius);
}

#[test_log::test]
fn fresh_object_has_defaults_and_is_invisible() {
    let mut env = Environment::new();
    let item = env.initialize_object("cursor").unwrap().item();

    assert_eq!(
        env.snapshot("cursor").unwrap().to_string(),
        r#"{"position":{"x":0.0,"y":0.0,"z":0.0},"radius":1.0}"#
    );

    env.update();
    let surface = env.surface();
    let circle = surface.item(item).unwrap();
    assert!(circle.fill.is_empty());
    assert!(circle.outline.is_empty());
    assert!(surface.frame().unwrap().primitives[0].is_invisible());
}

#[test_log::test]
fn later_objects_stack_above_until_raised() {
    let mut env = Environment::new();
    let cursor = env.initialize_object("cursor").unwrap().item();
    let target = env.initialize_object("target").unwrap().item();

    assert_eq!(paint_order(&mut env), vec![cursor, target]);

    env.get_mut("cursor").unwrap().raise_to_front().unwrap();
    assert_eq!(paint_order(&mut env), vec![target, cursor]);

    env.get_mut("target").unwrap().raise_to_front().unwrap();
    assert_eq!(paint_order(&mut env), vec![cursor, target]);
}

#[test_log::test]
fn destroyed_key_can_be_reused() {
    let mut env = Environment::new();
    let first = {
        let cursor = env.initialize_object("cursor").unwrap();
        cursor.set_radius(0.1).unwrap();
        cursor.set_position((0.3, 0.3, 0.3)).unwrap();
        cursor.set_color(Rgba::rgb(1.0, 1.0, 1.0)).unwrap();
        cursor.item()
    };

    env.destroy_object("cursor").unwrap();
    assert!(env.surface().item(first).is_none());

    let second = env.initialize_object("cursor").unwrap();
    assert_ne!(second.item(), first);
    assert_eq!(second.position(), Position::default());
    assert_eq!(second.radius(), 1.0);
    assert_eq!(second.snapshot().unwrap().color, None);
    assert_eq!(env.len(), 1);
}

#[test_log::test]
fn live_key_is_never_overwritten() {
    let mut env = Environment::new();
    env.initialize_object("a").unwrap();
    for _ in 0..3 {
        assert_eq!(
            env.initialize_object("a").unwrap_err(),
            EnvError::DuplicateKey("a".into())
        );
    }
    assert_eq!(env.surface().item_count(), 1);
}

#[test_log::test]
fn updates_without_mutation_render_identical_frames() {
    let mut env = Environment::new();
    env.initialize_object("a").unwrap().set_color(Rgba::rgb(0.0, 1.0, 0.0)).unwrap();

    env.update();
    let first = env.surface().frame().cloned().unwrap();
    env.update();
    let second = env.surface().frame().cloned().unwrap();

    assert!(first.same_content(&second));
    assert_ne!(first.index, second.index);
}

#[test_log::test]
fn batched_edits_become_visible_together() {
    let mut env = Environment::new();
    env.initialize_object("a").unwrap();
    env.update();
    let baseline = env.surface().frame().cloned().unwrap();

    {
        let a = env.get_mut("a").unwrap();
        a.set_color(Rgba::rgb(1.0, 0.0, 0.0)).unwrap();
        a.set_radius(0.5).unwrap();
        a.set_position((0.2, 0.2, 0.0)).unwrap();
    }
    env.initialize_object("b").unwrap().set_color(Rgba::rgb(0.0, 0.0, 1.0)).unwrap();

    // Nothing is rendered until the next update.
    assert!(env.surface().frame().unwrap().same_content(&baseline));
    assert_eq!(env.surface().flush_count(), 1);

    env.update();
    let frame = env.surface().frame().cloned().unwrap();
    assert_eq!(frame.primitives.len(), 2);
    assert_eq!(frame.primitives[0].fill, "#FF0000");
    assert_eq!(frame.primitives[0].radius, 150.0);
    assert_eq!(frame.primitives[1].fill, "#0000FF");
}

#[test_log::test]
fn z_is_stored_but_not_projected() {
    let mut env = Environment::new();
    let a = env.initialize_object("a").unwrap();
    a.set_position((0.25, 0.25, -1.0)).unwrap();
    let item = a.item();
    let near = env.surface().item(item).unwrap().center;

    env.get_mut("a").unwrap().set_position((0.25, 0.25, 1.0)).unwrap();
    let far = env.surface().item(item).unwrap().center;

    assert_eq!(near, far);
    assert_eq!(env.get("a").unwrap().position().z, 1.0);
}

#[test_log::test]
fn out_of_range_positions_project_off_surface() {
    let mut env = Environment::new();
    let a = env.initialize_object("a").unwrap();
    a.set_position((3.0, -3.0, 0.0)).unwrap();
    let item = a.item();
    assert_eq!(env.surface().item(item).unwrap().center, Vec2::new(1200.0, 1200.0));
    assert_eq!(env.get("a").unwrap().position(), Position::new(3.0, -3.0, 0.0));
}

#[test_log::test]
fn external_edit_surfaces_as_fatal_error() {
    let mut env = Environment::new();
    let item = {
        let a = env.initialize_object("a").unwrap();
        a.set_color(Rgba::rgb(1.0, 0.0, 0.0)).unwrap();
        a.item()
    };

    env.with_surface_mut(|canvas| {
        use spheres_engine::surface::Surface;
        canvas.set_property(item, ItemProperty::Fill("#00FF00".into()))
    })
    .unwrap();

    let err = env.snapshot("a").unwrap_err();
    assert!(err.is_fatal(), "{err}");
}
