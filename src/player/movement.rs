use avian3d::prelude::*;
use bevy::prelude::*;

use super::input::{MoveInput, RunInput};
use super::state::*;
use crate::camera::CameraYaw;
use crate::physics::GameLayer;

/// Updates grounded state via raycast
pub fn update_grounded_state(
    mut commands: Commands,
    spatial_query: SpatialQuery,
    mut query: Query<(
        Entity,
        &Transform,
        &PlayerConfig,
        &PlayerVelocity,
        &mut CoyoteTime,
        Option<&Grounded>,
    )>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();

    for (entity, transform, config, velocity, mut coyote, was_grounded) in &mut query {
        // Ray from the capsule center down past the feet, plus float height
        let ground_check_dist = config.capsule_height / 2.0 + config.float_height + 0.1;

        let filter = SpatialQueryFilter::default().with_mask(GameLayer::World);

        let hit = spatial_query.cast_ray(
            transform.translation,
            Dir3::NEG_Y,
            ground_check_dist,
            true,
            &filter,
        );

        let is_grounded = hit.is_some() && velocity.y < 1.0;

        if is_grounded {
            if was_grounded.is_none() {
                commands.entity(entity).insert(Grounded);
            }
            coyote.timer = 0.0;
        } else {
            if was_grounded.is_some() {
                commands.entity(entity).remove::<Grounded>();
            }
            coyote.timer += dt;
        }
    }
}

/// Camera-relative movement intent, from the yaw rig's flattened basis.
fn move_direction(yaw: &Transform, input: Vec2) -> Vec3 {
    let forward = yaw.forward().as_vec3();
    let right = yaw.right().as_vec3();
    let forward = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    let right = Vec3::new(right.x, 0.0, right.z).normalize_or_zero();
    (forward * input.y + right * input.x).normalize_or_zero()
}

/// Applies ground movement - sets horizontal velocity
pub fn ground_movement(
    mut query: Query<
        (
            &MoveInput,
            &RunInput,
            &Transform,
            &PlayerConfig,
            &mut PlayerVelocity,
        ),
        With<Grounded>,
    >,
    yaw_query: Query<&Transform, (With<CameraYaw>, Without<MoveInput>)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();

    let Ok(yaw_transform) = yaw_query.single() else {
        return;
    };

    for (input, run, transform, config, mut velocity) in &mut query {
        let move_dir = move_direction(yaw_transform, input.0);
        let mut target_speed = config.move_speed(run.0);

        // While the body hasn't finished turning, scale speed by how well it
        // already faces the move direction. turn_vel_multiplier = 1 keeps
        // full speed throughout.
        if move_dir != Vec3::ZERO {
            let facing = transform.forward().as_vec3();
            let alignment = facing.dot(move_dir).max(0.0);
            let retained = config.turn_vel_multiplier.clamp(0.0, 1.0);
            target_speed *= retained + (1.0 - retained) * alignment;
        }

        let target = move_dir * target_speed;
        let current = Vec3::new(velocity.x, 0.0, velocity.z);

        let accel = if input.length_squared() > 0.01 {
            config.ground_accel
        } else {
            config.ground_friction
        };

        let new_vel = current.move_towards(target, accel * dt);
        velocity.x = new_vel.x;
        velocity.z = new_vel.z;
    }
}

/// Applies air movement with reduced control
pub fn air_movement(
    mut query: Query<(&MoveInput, &PlayerConfig, &mut PlayerVelocity), Without<Grounded>>,
    yaw_query: Query<&Transform, (With<CameraYaw>, Without<MoveInput>)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();

    let Ok(yaw_transform) = yaw_query.single() else {
        return;
    };

    for (input, config, mut velocity) in &mut query {
        if input.length_squared() < 0.01 {
            continue;
        }

        let move_dir = move_direction(yaw_transform, input.0);

        let current_speed = velocity.dot(move_dir);
        let add_speed = (config.walk_speed - current_speed).max(0.0);
        let accel_speed = (config.air_accel * dt).min(add_speed);

        velocity.x += move_dir.x * accel_speed;
        velocity.z += move_dir.z * accel_speed;
    }
}

/// Applies gravity when not grounded
pub fn apply_gravity(
    mut query: Query<&mut PlayerVelocity, Without<Grounded>>,
    gravity: Res<Gravity>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    for mut velocity in &mut query {
        velocity.0 += gravity.0 * dt;
    }
}

/// Syncs PlayerVelocity to Avian's LinearVelocity
pub fn apply_velocity(
    mut query: Query<
        (
            &mut PlayerVelocity,
            &PlayerConfig,
            &mut LinearVelocity,
            Has<Grounded>,
        ),
        With<Player>,
    >,
) {
    for (mut player_vel, config, mut lin_vel, grounded) in &mut query {
        // Clamp horizontal speed
        if config.max_horizontal_speed > 0.0 {
            let h_speed = Vec2::new(player_vel.x, player_vel.z).length();
            if h_speed > config.max_horizontal_speed {
                let scale = config.max_horizontal_speed / h_speed;
                player_vel.x *= scale;
                player_vel.z *= scale;
            }
        }

        lin_vel.x = player_vel.x;
        lin_vel.z = player_vel.z;
        lin_vel.y = if grounded {
            // Small downward bias keeps the capsule seated on the floor
            player_vel.y.min(-0.5)
        } else {
            player_vel.y
        };
    }
}

/// Yaws the body toward its movement direction at `turn_speed`.
pub fn turn_toward_movement(
    mut query: Query<(&MoveInput, &PlayerConfig, &mut Transform), With<Player>>,
    yaw_query: Query<&Transform, (With<CameraYaw>, Without<Player>)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();

    let Ok(yaw_transform) = yaw_query.single() else {
        return;
    };

    for (input, config, mut transform) in &mut query {
        let move_dir = move_direction(yaw_transform, input.0);
        if move_dir == Vec3::ZERO {
            continue;
        }

        let target = Quat::from_rotation_arc(Vec3::NEG_Z, move_dir);
        let t = (config.turn_speed * dt).min(1.0);
        transform.rotation = transform.rotation.slerp(target, t);
    }
}

/// Re-aligns the body to upright when auto balancing is enabled.
pub fn keep_upright(mut query: Query<(&PlayerConfig, &mut Transform), With<Player>>) {
    for (config, mut transform) in &mut query {
        if !config.auto_balance {
            continue;
        }
        let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
        transform.rotation = Quat::from_rotation_y(yaw);
    }
}
