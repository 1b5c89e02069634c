use bevy::prelude::*;

use super::orbit::*;

/// Plugin for the third-person follow camera
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera_rig);

        app.add_systems(
            Update,
            (follow_player, apply_mouse_look, zoom_camera).chain(),
        );
    }
}
