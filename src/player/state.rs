use bevy::prelude::*;

/// Marker component for the player entity (also used as input context)
#[derive(Component, Default)]
pub struct Player;

/// Character controller tuning
#[derive(Component, Clone, Copy)]
pub struct PlayerConfig {
    /// Walking speed in m/s
    pub walk_speed: f32,
    /// Walk-speed multiplier while run is held; values <= 1 disable the boost
    pub sprint_mult: f32,
    /// Ground acceleration
    pub ground_accel: f32,
    /// Ground friction/deceleration
    pub ground_friction: f32,
    /// Air acceleration (reduced control)
    pub air_accel: f32,
    /// Jump impulse velocity
    pub jump_velocity: f32,
    /// Multiplier applied to upward velocity when jump is released early (0.0-1.0)
    pub jump_cut_multiplier: f32,
    /// Coyote time duration in seconds
    pub coyote_time: f32,
    /// Jump buffer duration in seconds
    pub jump_buffer: f32,
    /// Extra clearance under the capsule still counted as grounded
    pub float_height: f32,
    /// Capsule height including the caps
    pub capsule_height: f32,
    /// Capsule radius
    pub radius: f32,
    /// Yaw rate toward the movement direction; large values turn instantly
    pub turn_speed: f32,
    /// Fraction of move speed retained while the body is still turning
    pub turn_vel_multiplier: f32,
    /// Re-align the body to upright every step
    pub auto_balance: bool,
    /// Maximum horizontal speed (m/s), 0.0 = uncapped
    pub max_horizontal_speed: f32,
}

impl Default for PlayerConfig {
    /// Scene tuning: no float height, run grants no extra speed, turning is
    /// effectively instant, no auto balancing.
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_mult: 0.0,
            ground_accel: 50.0,
            ground_friction: 40.0,
            air_accel: 15.0,
            jump_velocity: 8.0,
            jump_cut_multiplier: 0.5,
            coyote_time: 0.15,
            jump_buffer: 0.1,
            float_height: 0.0,
            capsule_height: 1.8,
            radius: 0.4,
            turn_speed: 100.0,
            turn_vel_multiplier: 1.0,
            auto_balance: false,
            max_horizontal_speed: 20.0,
        }
    }
}

impl PlayerConfig {
    /// Target speed for the current run state.
    pub fn move_speed(&self, running: bool) -> f32 {
        if running && self.sprint_mult > 1.0 {
            self.walk_speed * self.sprint_mult
        } else {
            self.walk_speed
        }
    }
}

/// Current player velocity, applied to the body at the end of each step
#[derive(Component, Default, Deref, DerefMut)]
pub struct PlayerVelocity(pub Vec3);

/// Marker: player is on the ground
#[derive(Component)]
#[component(storage = "SparseSet")]
pub struct Grounded;

/// Marker: variable jump height cut has been applied this jump
#[derive(Component)]
#[component(storage = "SparseSet")]
pub struct JumpCut;

/// Coyote time tracking
#[derive(Component, Default)]
pub struct CoyoteTime {
    /// Time since leaving ground
    pub timer: f32,
}

/// Jump buffer tracking
#[derive(Component, Default)]
pub struct JumpBuffer {
    /// Time since jump was pressed
    pub timer: f32,
    /// Whether a jump is buffered
    pub buffered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_sprint_mult_leaves_run_at_walk_speed() {
        let config = PlayerConfig::default();
        assert_eq!(config.move_speed(true), config.walk_speed);
        assert_eq!(config.move_speed(false), config.walk_speed);
    }

    #[test]
    fn sprint_mult_above_one_scales_run_speed() {
        let config = PlayerConfig {
            sprint_mult: 1.6,
            ..default()
        };
        assert_eq!(config.move_speed(true), config.walk_speed * 1.6);
        assert_eq!(config.move_speed(false), config.walk_speed);
    }
}
