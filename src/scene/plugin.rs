use bevy::prelude::*;

use super::floor::spawn_floor;
use super::grid::spawn_grid;
use super::lighting::spawn_lighting;

/// Plugin that assembles the static scene: floor, reference grid, lights.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_floor, spawn_grid, spawn_lighting));
    }
}
