use avian3d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use super::palette::BoxPalette;
use super::plugin::BoxMesh;
use crate::physics::GameLayer;

/// How many boxes rain in when the scene starts
pub const AMBIENT_BOX_COUNT: usize = 40;

const X_RANGE: std::ops::Range<f32> = -5.0..5.0;
const Y_RANGE: std::ops::Range<f32> = 0.0..10.0;
const Z_RANGE: std::ops::Range<f32> = 5.0..15.0;

/// Marker for boxes spawned at scene start
#[derive(Component)]
pub struct AmbientBox;

/// Initial position of an ambient box, drawn uniformly per axis.
pub fn ambient_spawn_translation<R: Rng>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen_range(X_RANGE),
        rng.gen_range(Y_RANGE),
        rng.gen_range(Z_RANGE),
    )
}

/// Spawns the startup population of dynamic boxes above the floor.
///
/// Each box is placed exactly once, at spawn, with zero velocity; running
/// this again while ambient boxes exist is a no-op so positions are never
/// re-randomized.
pub fn spawn_ambient_boxes(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    palette: Res<BoxPalette>,
    cube: Res<BoxMesh>,
    existing: Query<(), With<AmbientBox>>,
) {
    if !existing.is_empty() {
        return;
    }

    let mut rng = rand::thread_rng();

    for _ in 0..AMBIENT_BOX_COUNT {
        commands.spawn((
            AmbientBox,
            Mesh3d(cube.0.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: palette.random_color(&mut rng),
                ..default()
            })),
            Transform::from_translation(ambient_spawn_translation(&mut rng)),
            RigidBody::Dynamic,
            Collider::cuboid(1.0, 1.0, 1.0),
            CollisionLayers::new(
                GameLayer::Boxes,
                [GameLayer::World, GameLayer::Player, GameLayer::Boxes],
            ),
        ));
    }

    debug!("spawned {AMBIENT_BOX_COUNT} ambient boxes");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_translations_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let p = ambient_spawn_translation(&mut rng);
            assert!((-5.0..5.0).contains(&p.x));
            assert!((0.0..10.0).contains(&p.y));
            assert!((5.0..15.0).contains(&p.z));
        }
    }

    #[test]
    fn axes_are_drawn_independently() {
        // A thousand draws should cover most of each range, which a
        // lockstep generator would not.
        let mut rng = StdRng::seed_from_u64(2);
        let points: Vec<Vec3> = (0..1000).map(|_| ambient_spawn_translation(&mut rng)).collect();

        let x_spread = points.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max)
            - points.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
        let y_spread = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max)
            - points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);

        assert!(x_spread > 8.0);
        assert!(y_spread > 8.0);
    }
}
