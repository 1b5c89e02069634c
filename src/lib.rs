pub mod boxes;
pub mod camera;
pub mod physics;
pub mod player;
pub mod scene;

pub use boxes::BoxesPlugin;
pub use camera::CameraPlugin;
pub use physics::PhysicsPlugin;
pub use player::PlayerPlugin;
pub use scene::ScenePlugin;

use bevy::prelude::*;

/// Unified plugin that adds physics, the scene, the box spawners, the player
/// controller, and the follow camera.
pub struct BoxRangePlugin;

impl Plugin for BoxRangePlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<PhysicsPlugin>() {
            app.add_plugins(PhysicsPlugin);
        }
        if !app.is_plugin_added::<ScenePlugin>() {
            app.add_plugins(ScenePlugin);
        }
        if !app.is_plugin_added::<BoxesPlugin>() {
            app.add_plugins(BoxesPlugin);
        }
        if !app.is_plugin_added::<PlayerPlugin>() {
            app.add_plugins(PlayerPlugin);
        }
        if !app.is_plugin_added::<CameraPlugin>() {
            app.add_plugins(CameraPlugin);
        }
    }
}

pub mod prelude {
    pub use crate::boxes::{
        AmbientBox, BoxPalette, BoxesPlugin, ShotBox, ShotBoxes, AMBIENT_BOX_COUNT,
    };
    pub use crate::camera::{CameraConfig, CameraPlugin, CameraYaw, FollowCamera};
    pub use crate::physics::{GameLayer, PhysicsPlugin};
    pub use crate::player::{Grounded, Player, PlayerConfig, PlayerPlugin, PlayerVelocity};
    pub use crate::scene::{Floor, ScenePlugin};
    pub use crate::BoxRangePlugin;
}
