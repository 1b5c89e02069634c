//! Headless scene tests: spawner counts, click handling, teardown, and the
//! static-floor invariant.

use avian3d::prelude::*;
use bevy::asset::AssetPlugin;
use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use box_range::prelude::*;

/// Minimal app with the scene and box spawners but no window, renderer,
/// player, or physics stepping.
fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TransformPlugin, AssetPlugin::default()));
    app.init_asset::<Mesh>();
    app.init_asset::<StandardMaterial>();
    app.add_message::<MouseButtonInput>();
    app.add_plugins((ScenePlugin, BoxesPlugin));
    app
}

/// Same app with the physics engine actually stepping bodies.
fn simulating_app() -> App {
    let mut app = headless_app();
    app.add_plugins(PhysicsPlugins::default());
    app
}

fn press_button(app: &mut App, button: MouseButton, state: ButtonState) {
    app.world_mut().write_message(MouseButtonInput {
        button,
        state,
        window: Entity::PLACEHOLDER,
    });
}

fn click(app: &mut App) {
    press_button(app, MouseButton::Left, ButtonState::Pressed);
    app.update();
    press_button(app, MouseButton::Left, ButtonState::Released);
    app.update();
}

fn shot_log_len(app: &App) -> usize {
    app.world().resource::<ShotBoxes>().len()
}

fn count_shot_boxes(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<ShotBox>>()
        .iter(app.world())
        .count()
}

#[test]
fn ambient_spawner_creates_forty_dynamic_boxes_in_bounds() {
    let mut app = headless_app();
    app.update();

    let world = app.world_mut();
    let mut query = world.query_filtered::<(&Transform, &RigidBody), With<AmbientBox>>();
    let boxes: Vec<_> = query.iter(world).collect();

    assert_eq!(boxes.len(), AMBIENT_BOX_COUNT);
    for (transform, body) in boxes {
        assert!(matches!(body, RigidBody::Dynamic));
        let p = transform.translation;
        assert!((-5.0..5.0).contains(&p.x), "x out of range: {p}");
        assert!((0.0..10.0).contains(&p.y), "y out of range: {p}");
        assert!((5.0..15.0).contains(&p.z), "z out of range: {p}");
    }
}

#[test]
fn rerunning_startup_does_not_respawn_or_move_ambient_boxes() {
    let mut app = headless_app();
    app.update();

    let positions = |app: &mut App| -> Vec<Vec3> {
        app.world_mut()
            .query_filtered::<&Transform, With<AmbientBox>>()
            .iter(app.world())
            .map(|t| t.translation)
            .collect()
    };
    let before = positions(&mut app);

    // Run the spawner again by hand; it must be a no-op.
    app.world_mut()
        .run_system_cached(box_range::boxes::spawn_ambient_boxes)
        .expect("spawner runs");
    app.update();

    let after = positions(&mut app);
    assert_eq!(before.len(), AMBIENT_BOX_COUNT);
    assert_eq!(before, after);
}

#[test]
fn zero_clicks_means_no_shot_boxes() {
    let mut app = headless_app();
    app.update();
    app.update();

    assert_eq!(shot_log_len(&app), 0);
    assert_eq!(count_shot_boxes(&mut app), 0);

    // Only the ambient population is dynamic; the floor is static.
    let world = app.world_mut();
    let dynamic = world
        .query::<&RigidBody>()
        .iter(world)
        .filter(|b| matches!(b, RigidBody::Dynamic))
        .count();
    assert_eq!(dynamic, AMBIENT_BOX_COUNT);
}

#[test]
fn each_click_appends_exactly_one_shot_box() {
    let mut app = headless_app();
    app.update();

    for expected in 1..=3 {
        click(&mut app);
        assert_eq!(shot_log_len(&app), expected);
        assert_eq!(count_shot_boxes(&mut app), expected);
    }

    // No new press, no new box.
    app.update();
    assert_eq!(shot_log_len(&app), 3);
}

#[test]
fn presses_landing_in_the_same_frame_each_spawn_a_box() {
    let mut app = headless_app();
    app.update();

    // A frame hitch can deliver press-release-press in a single update;
    // both presses must count. Releases and other buttons must not.
    press_button(&mut app, MouseButton::Left, ButtonState::Pressed);
    press_button(&mut app, MouseButton::Left, ButtonState::Released);
    press_button(&mut app, MouseButton::Left, ButtonState::Pressed);
    press_button(&mut app, MouseButton::Right, ButtonState::Pressed);
    app.update();

    assert_eq!(shot_log_len(&app), 2);
    assert_eq!(count_shot_boxes(&mut app), 2);
}

#[test]
fn thrown_boxes_share_one_cube_mesh() {
    let mut app = headless_app();
    app.update();

    let meshes_before = app.world().resource::<Assets<Mesh>>().len();
    for _ in 0..3 {
        click(&mut app);
    }
    let meshes_after = app.world().resource::<Assets<Mesh>>().len();

    // Throws clone the shared handle instead of registering new meshes.
    assert_eq!(count_shot_boxes(&mut app), 3);
    assert_eq!(meshes_before, meshes_after);
}

#[test]
fn every_thrown_box_keeps_its_own_launch_velocity() {
    let mut app = headless_app();
    app.update();

    for _ in 0..3 {
        click(&mut app);
    }

    // No physics stepping here, so each body still carries the velocity it
    // was launched with at its own click.
    let world = app.world_mut();
    let velocities: Vec<Vec3> = world
        .query_filtered::<&LinearVelocity, With<ShotBox>>()
        .iter(world)
        .map(|v| v.0)
        .collect();

    assert_eq!(velocities.len(), 3);
    for v in velocities {
        assert!(v.y >= 5.0, "gravity offset missing: {v}");
    }
}

#[test]
fn throw_without_a_camera_is_vertical_only_from_origin() {
    let mut app = headless_app();
    app.update();
    click(&mut app);

    let world = app.world_mut();
    let mut query = world.query_filtered::<(&Transform, &LinearVelocity), With<ShotBox>>();
    let (transform, velocity) = query.single(world).expect("one shot box");

    assert_eq!(transform.translation, Vec3::ZERO);
    assert!(velocity.x >= 0.0 && velocity.x < 2.0);
    assert!(velocity.z >= 0.0 && velocity.z < 2.0);
    assert!(velocity.y >= 5.0 && velocity.y < 7.0);
}

#[test]
fn throw_follows_the_camera_look_direction() {
    let mut app = headless_app();

    // Camera at (0, 5, 10) looking straight down -Z.
    let cam = Transform::from_xyz(0.0, 5.0, 10.0).looking_to(Dir3::NEG_Z, Vec3::Y);
    app.world_mut()
        .spawn((FollowCamera, cam, GlobalTransform::from(cam)));

    app.update();
    click(&mut app);

    let world = app.world_mut();
    let mut query = world.query_filtered::<(&Transform, &LinearVelocity), With<ShotBox>>();
    let (transform, velocity) = query.single(world).expect("one shot box");

    // Spawn point leads the camera by 3 units.
    assert!(transform.translation.distance(Vec3::new(0.0, 5.0, 7.0)) < 1e-3);

    // Throw axis dominates: -10 base plus [0, 2) jitter.
    assert!(velocity.z >= -10.0 && velocity.z < -8.0);
    assert!(velocity.y >= 5.0 && velocity.y < 7.0);
    assert!(velocity.x >= 0.0 && velocity.x < 2.0);
}

#[test]
fn removing_the_shot_log_tears_down_the_click_listener() {
    let mut app = headless_app();
    app.update();
    click(&mut app);
    assert_eq!(count_shot_boxes(&mut app), 1);

    app.world_mut().remove_resource::<ShotBoxes>();

    click(&mut app);
    click(&mut app);
    assert_eq!(count_shot_boxes(&mut app), 1);
}

#[test]
fn floor_never_moves_under_simulation() {
    let mut app = simulating_app();
    app.update();

    for _ in 0..60 {
        app.update();
    }

    let world = app.world_mut();
    let mut query = world.query_filtered::<(&Transform, &RigidBody), With<Floor>>();
    let (transform, body) = query.single(world).expect("one floor body");

    assert!(matches!(body, RigidBody::Static));
    assert!(transform.translation.distance(box_range::scene::FLOOR_POSITION) < 1e-5);
    assert!(transform.rotation.angle_between(Quat::IDENTITY) < 1e-5);
}
