use bevy::prelude::*;
use box_range::prelude::*;

fn main() {
    // One palette per process; every box spawned this session shares it.
    let palette = BoxPalette::pick(&mut rand::thread_rng());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Box Range".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(palette)
        .add_plugins(BoxRangePlugin)
        .run();
}
