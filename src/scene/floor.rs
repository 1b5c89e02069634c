use avian3d::prelude::*;
use bevy::prelude::*;

use crate::physics::GameLayer;

/// Marker for the ground-plane body
#[derive(Component)]
pub struct Floor;

/// Full extents of the floor slab
pub const FLOOR_SIZE: Vec3 = Vec3::new(300.0, 5.0, 300.0);

/// Slab center, so its top surface sits at y = -1
pub const FLOOR_POSITION: Vec3 = Vec3::new(0.0, -3.5, 0.0);

/// Spawns the one static body everything rests on. It never moves after this.
pub fn spawn_floor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Floor,
        Mesh3d(meshes.add(Cuboid::new(FLOOR_SIZE.x, FLOOR_SIZE.y, FLOOR_SIZE.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_translation(FLOOR_POSITION),
        RigidBody::Static,
        Collider::cuboid(FLOOR_SIZE.x, FLOOR_SIZE.y, FLOOR_SIZE.z),
        CollisionLayers::new(GameLayer::World, [GameLayer::Player, GameLayer::Boxes]),
    ));
}
