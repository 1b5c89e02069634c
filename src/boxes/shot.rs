use avian3d::prelude::*;
use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use rand::Rng;

use super::palette::BoxPalette;
use super::plugin::BoxMesh;
use crate::camera::FollowCamera;
use crate::physics::GameLayer;

/// Distance in front of the camera where a thrown box appears
pub const THROW_LEAD: f32 = 3.0;

/// Base launch speed along the camera's look direction
pub const LAUNCH_SPEED: f32 = 10.0;

/// Per-axis launch jitter, uniform in [0, LAUNCH_JITTER)
pub const LAUNCH_JITTER: f32 = 2.0;

/// Upward bias added on top of the look direction to counter gravity
pub const LAUNCH_LIFT: f32 = 5.0;

/// Per-axis spin, uniform in [0, SPIN_MAX)
pub const SPIN_MAX: f32 = 10.0;

/// Marker for boxes thrown by clicking
#[derive(Component)]
pub struct ShotBox;

/// Append-only log of thrown boxes, in click order.
///
/// The click system only runs while this resource exists; removing it is the
/// teardown path and guarantees no box spawns after the scene is gone.
#[derive(Resource, Default, Deref)]
pub struct ShotBoxes(Vec<Entity>);

/// Point a thrown box starts from: just ahead of the camera.
pub fn throw_origin(camera: &GlobalTransform) -> Vec3 {
    camera.translation() + camera.forward() * THROW_LEAD
}

/// Launch velocity for a throw along `direction` (unit look vector, or zero
/// when no camera exists yet — the throw is then vertical-only).
pub fn launch_velocity<R: Rng>(direction: Vec3, rng: &mut R) -> Vec3 {
    direction * LAUNCH_SPEED
        + Vec3::new(
            rng.gen_range(0.0..LAUNCH_JITTER),
            LAUNCH_LIFT + rng.gen_range(0.0..LAUNCH_JITTER),
            rng.gen_range(0.0..LAUNCH_JITTER),
        )
}

/// Random tumble applied to a thrown box.
pub fn spin_velocity<R: Rng>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen_range(0.0..SPIN_MAX),
        rng.gen_range(0.0..SPIN_MAX),
        rng.gen_range(0.0..SPIN_MAX),
    )
}

/// Spawns one launched box per left-button press message, no debouncing.
/// The raw message stream is consumed so presses landing in the same frame
/// each count.
///
/// Every box is its own body and gets its launch state at its own click;
/// after that the physics engine owns it entirely.
pub fn throw_box_on_click(
    mut commands: Commands,
    mut clicks: MessageReader<MouseButtonInput>,
    camera: Query<&GlobalTransform, With<FollowCamera>>,
    palette: Res<BoxPalette>,
    cube: Res<BoxMesh>,
    mut shot_boxes: ResMut<ShotBoxes>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();

    for click in clicks.read() {
        if click.button != MouseButton::Left || click.state != ButtonState::Pressed {
            continue;
        }

        let (origin, direction) = match camera.single() {
            Ok(cam) => (throw_origin(cam), cam.forward().as_vec3()),
            Err(_) => (Vec3::ZERO, Vec3::ZERO),
        };

        let entity = commands
            .spawn((
                ShotBox,
                Mesh3d(cube.0.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: palette.random_color(&mut rng),
                    ..default()
                })),
                Transform::from_translation(origin),
                RigidBody::Dynamic,
                Collider::cuboid(1.0, 1.0, 1.0),
                CollisionLayers::new(
                    GameLayer::Boxes,
                    [GameLayer::World, GameLayer::Player, GameLayer::Boxes],
                ),
                LinearVelocity(launch_velocity(direction, &mut rng)),
                AngularVelocity(spin_velocity(&mut rng)),
            ))
            .id();

        shot_boxes.0.push(entity);
        debug!("threw box {} (total {})", entity, shot_boxes.len());
    }
}
