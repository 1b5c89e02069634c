use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use crate::player::{LookInput, Player};

/// Marker for the yaw (horizontal rotation) entity
#[derive(Component)]
pub struct CameraYaw;

/// Marker for the pitch (vertical rotation) entity
#[derive(Component)]
pub struct CameraPitch;

/// Marker for the scene camera at the end of the boom
#[derive(Component)]
pub struct FollowCamera;

/// Current boom length behind the character
#[derive(Component, Deref, DerefMut)]
pub struct BoomDistance(pub f32);

/// Camera configuration
#[derive(Component, Clone)]
pub struct CameraConfig {
    /// Mouse sensitivity
    pub sensitivity: f32,
    /// Maximum pitch angle (looking up)
    pub max_pitch: f32,
    /// Minimum pitch angle (looking down)
    pub min_pitch: f32,
    /// Boom length at startup
    pub init_distance: f32,
    /// Closest the boom may zoom
    pub min_distance: f32,
    /// Farthest the boom may zoom
    pub max_distance: f32,
    /// Follow responsiveness; large values snap to the player
    pub follow_mult: f32,
}

impl Default for CameraConfig {
    /// Scene tuning: fixed close-in boom, instant follow.
    fn default() -> Self {
        Self {
            sensitivity: 0.003,
            max_pitch: 89.0_f32.to_radians(),
            min_pitch: -89.0_f32.to_radians(),
            init_distance: 0.5,
            min_distance: 0.5,
            max_distance: 0.5,
            follow_mult: 100.0,
        }
    }
}

/// Current pitch angle in radians
#[derive(Component, Default, Deref, DerefMut)]
pub struct PitchAngle(pub f32);

/// Spawns the camera rig: yaw -> pitch -> camera on a boom.
pub fn spawn_camera_rig(mut commands: Commands) {
    let config = CameraConfig::default();
    let boom = config.init_distance;

    let yaw_entity = commands
        .spawn((
            CameraYaw,
            Transform::from_translation(Vec3::new(0.0, 2.0, 0.0)),
            Visibility::default(),
        ))
        .id();

    let pitch_entity = commands
        .spawn((
            CameraPitch,
            PitchAngle::default(),
            config,
            Transform::from_translation(Vec3::new(0.0, 0.8, 0.0)),
            Visibility::default(),
        ))
        .id();

    let camera_entity = commands
        .spawn((
            FollowCamera,
            BoomDistance(boom),
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: 75.0_f32.to_radians(),
                ..default()
            }),
            Transform::from_translation(Vec3::new(0.0, 0.0, boom)),
        ))
        .id();

    commands.entity(yaw_entity).add_child(pitch_entity);
    commands.entity(pitch_entity).add_child(camera_entity);
}

/// Moves the yaw rig toward the player. follow_mult = 100 snaps in a frame.
pub fn follow_player(
    player_query: Query<&Transform, With<Player>>,
    config_query: Query<&CameraConfig, With<CameraPitch>>,
    mut yaw_query: Query<&mut Transform, (With<CameraYaw>, Without<Player>)>,
    time: Res<Time>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let Ok(config) = config_query.single() else {
        return;
    };

    if let Ok(mut yaw_transform) = yaw_query.single_mut() {
        let t = (config.follow_mult * time.delta_secs()).min(1.0);
        yaw_transform.translation = yaw_transform.translation.lerp(player_transform.translation, t);
    }
}

/// Applies mouse look rotation to the rig
pub fn apply_mouse_look(
    player_query: Query<&LookInput, With<Player>>,
    mut yaw_query: Query<&mut Transform, (With<CameraYaw>, Without<CameraPitch>)>,
    mut pitch_query: Query<(&mut Transform, &mut PitchAngle, &CameraConfig), With<CameraPitch>>,
) {
    let Ok(look_input) = player_query.single() else {
        return;
    };

    let Ok((mut pitch_transform, mut pitch_angle, config)) = pitch_query.single_mut() else {
        return;
    };

    // Apply yaw (horizontal rotation)
    if let Ok(mut yaw_transform) = yaw_query.single_mut() {
        yaw_transform.rotate_y(-look_input.x * config.sensitivity);
    }

    // Apply pitch (vertical rotation)
    pitch_angle.0 -= look_input.y * config.sensitivity;
    pitch_angle.0 = pitch_angle.0.clamp(config.min_pitch, config.max_pitch);
    pitch_transform.rotation = Quat::from_rotation_x(pitch_angle.0);
}

/// Scroll wheel adjusts the boom within the configured distance clamp.
/// With min = max the boom is fixed and scrolling is inert.
pub fn zoom_camera(
    mut wheel: MessageReader<MouseWheel>,
    config_query: Query<&CameraConfig, With<CameraPitch>>,
    mut camera_query: Query<(&mut BoomDistance, &mut Transform), With<FollowCamera>>,
) {
    let scroll: f32 = wheel.read().map(|msg| msg.y).sum();
    if scroll == 0.0 {
        return;
    }

    let Ok(config) = config_query.single() else {
        return;
    };
    let Ok((mut boom, mut transform)) = camera_query.single_mut() else {
        return;
    };

    boom.0 = (boom.0 - scroll * 0.25).clamp(config.min_distance, config.max_distance);
    transform.translation.z = boom.0;
}
