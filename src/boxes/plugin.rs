use bevy::prelude::*;

use super::ambient::spawn_ambient_boxes;
use super::palette::BoxPalette;
use super::shot::{throw_box_on_click, ShotBoxes};

/// The one unit-cube mesh shared by every spawned box
#[derive(Resource)]
pub struct BoxMesh(pub Handle<Mesh>);

impl FromWorld for BoxMesh {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        Self(meshes.add(Cuboid::new(1.0, 1.0, 1.0)))
    }
}

/// Plugin for the two box spawners: the startup population and the
/// click-to-throw listener.
pub struct BoxesPlugin;

impl Plugin for BoxesPlugin {
    fn build(&self, app: &mut App) {
        // `main` normally inserts the session palette explicitly; this is
        // the fallback so the plugin also works standalone.
        app.init_resource::<BoxPalette>();
        app.init_resource::<BoxMesh>();
        app.init_resource::<ShotBoxes>();

        app.add_systems(Startup, spawn_ambient_boxes);
        app.add_systems(
            Update,
            throw_box_on_click.run_if(resource_exists::<ShotBoxes>),
        );
    }
}
