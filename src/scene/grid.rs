use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::mesh::PrimitiveTopology;

/// Grid extents in world units (300 x 300, matching the floor)
pub const GRID_SIZE: f32 = 300.0;

/// One cell per meter
const CELL_SPACING: f32 = 1.0;

/// Every tenth line is a brighter section line
const SECTION_EVERY: u32 = 10;

const CELL_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0]; // gray
const SECTION_COLOR: [f32; 4] = [0.83, 0.83, 0.83, 1.0]; // light gray

/// Builds the reference grid as a line-list mesh with per-vertex colors.
pub fn build_grid_mesh(size: f32, spacing: f32) -> Mesh {
    let half = size / 2.0;
    let lines = (size / spacing) as u32;

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(((lines + 1) * 4) as usize);
    let mut colors: Vec<[f32; 4]> = Vec::with_capacity(((lines + 1) * 4) as usize);

    for i in 0..=lines {
        let offset = -half + i as f32 * spacing;
        let color = if i % SECTION_EVERY == 0 {
            SECTION_COLOR
        } else {
            CELL_COLOR
        };

        // Line parallel to Z, then its twin parallel to X
        positions.push([offset, 0.0, -half]);
        positions.push([offset, 0.0, half]);
        positions.push([-half, 0.0, offset]);
        positions.push([half, 0.0, offset]);
        for _ in 0..4 {
            colors.push(color);
        }
    }

    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
}

/// Spawns the visual reference grid just above the floor surface.
/// It carries no collider, so neither bodies nor camera rays hit it.
pub fn spawn_grid(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(build_grid_mesh(GRID_SIZE, CELL_SPACING))),
        MeshMaterial3d(materials.add(StandardMaterial {
            unlit: true,
            ..default()
        })),
        Transform::from_translation(Vec3::new(0.0, -0.99, 0.0)),
    ));
}
