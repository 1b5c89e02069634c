use avian3d::prelude::*;
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::input::{
    clear_look_input, handle_jump_end, handle_jump_start, handle_look_input, handle_move_end,
    handle_move_input, handle_run_end, handle_run_start, JumpAction, JumpHeld, JumpPressed,
    LookAction, LookInput, MoveAction, MoveInput, RunAction, RunInput,
};
use super::jump::*;
use super::movement::*;
use super::state::*;
use crate::physics::GameLayer;

/// Plugin for the third-person player controller
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EnhancedInputPlugin);

        // Register input context for player
        app.add_input_context::<Player>();

        // Input observers
        app.add_observer(handle_move_input);
        app.add_observer(handle_move_end);
        app.add_observer(handle_look_input);
        app.add_observer(handle_run_start);
        app.add_observer(handle_run_end);
        app.add_observer(handle_jump_start);
        app.add_observer(handle_jump_end);

        app.add_systems(Startup, spawn_player);

        // Fixed update systems for physics
        app.add_systems(
            FixedUpdate,
            (
                update_grounded_state,
                handle_jump,
                variable_jump_height,
                ground_movement,
                air_movement,
                apply_gravity,
                apply_velocity,
                turn_toward_movement,
                keep_upright,
            )
                .chain(),
        );

        // Clear look input at end of frame (jump is cleared in FixedUpdate)
        app.add_systems(Last, clear_look_input);
    }
}

/// Spawns the player body with its keyboard/mouse action map.
///
/// The map is the scene's fixed table: forward `ArrowUp`/`W`, backward
/// `ArrowDown`/`S`, leftward `ArrowLeft`/`A`, rightward `ArrowRight`/`D`,
/// jump `Space`, run `Shift`.
fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let config = PlayerConfig::default();
    let capsule_height = config.capsule_height - config.radius * 2.0;

    commands
        .spawn((
            Player,
            config,
            PlayerVelocity::default(),
            CoyoteTime::default(),
            JumpBuffer::default(),
        ))
        .insert((
            // Input state
            MoveInput::default(),
            LookInput::default(),
            RunInput::default(),
            JumpPressed::default(),
            JumpHeld::default(),
        ))
        .insert((
            // Physics - dynamic body with locked rotation; yaw is written by
            // the turn system, not the solver
            RigidBody::Dynamic,
            Collider::capsule(config.radius, capsule_height),
            CollisionLayers::new(GameLayer::Player, [GameLayer::World, GameLayer::Boxes]),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            TranslationInterpolation,
            Friction::new(0.0),
            Restitution::new(0.0),
            GravityScale(0.0), // gravity is applied by the controller
        ))
        .insert((
            Mesh3d(meshes.add(Capsule3d::new(config.radius, capsule_height))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.8, 0.7, 0.6),
                ..default()
            })),
            Transform::from_translation(Vec3::new(0.0, 2.0, 0.0)),
            Visibility::default(),
        ))
        .insert(
            // Input bindings
            actions!(Player[
                (
                    Action::<MoveAction>::new(),
                    bindings![
                        (KeyCode::KeyW, SwizzleAxis::YXZ),
                        (KeyCode::ArrowUp, SwizzleAxis::YXZ),
                        (KeyCode::KeyS, SwizzleAxis::YXZ, Negate::all()),
                        (KeyCode::ArrowDown, SwizzleAxis::YXZ, Negate::all()),
                        KeyCode::KeyD,
                        KeyCode::ArrowRight,
                        (KeyCode::KeyA, Negate::all()),
                        (KeyCode::ArrowLeft, Negate::all()),
                    ],
                ),
                (
                    Action::<LookAction>::new(),
                    bindings![
                        Binding::mouse_motion(),
                    ],
                ),
                (
                    Action::<JumpAction>::new(),
                    bindings![KeyCode::Space],
                ),
                (
                    Action::<RunAction>::new(),
                    bindings![KeyCode::ShiftLeft, KeyCode::ShiftRight],
                ),
            ]),
        );
}
