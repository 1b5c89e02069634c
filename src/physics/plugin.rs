use avian3d::prelude::*;
use bevy::prelude::*;

/// Plugin that sets up the Avian3D physics engine
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            PhysicsPlugins::default().with_length_unit(1.0), // 1 unit = 1 meter
            PhysicsDebugPlugin::default(),
        ));

        // Variable time step: advance by the frame delta, capped so a
        // hitching frame cannot blow up the integrator.
        app.insert_resource(Time::new_with(Physics::variable(1.0 / 20.0)));

        app.insert_resource(Gravity(Vec3::NEG_Y * 9.81));
    }
}
