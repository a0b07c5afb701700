//! Movement domain: per-character motion tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Immutable motion tuning attached to each character at spawn.
///
/// Units are world units (one tile is one unit) and seconds.
#[derive(Component, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MotionConfig {
    pub move_speed: f32,
    pub jump_force: f32,
    /// Jumps available from the ground, the first one included.
    pub max_jumps: u8,
    /// Grounded time required before the jump budget refills.
    pub landing_cooldown: f32,
    pub ground_check_radius: f32,
    pub wall_check_distance: f32,
    pub wall_jump_force_x: f32,
    pub wall_jump_force_y: f32,
    /// Downward speed held while wall sliding.
    pub wall_slide_speed: f32,
    /// Horizontal speed allowed while wall sliding (0 pins the character to the wall).
    pub wall_slide_max_horizontal: f32,
    pub wall_jump_lock_time: f32,
    pub dash_force: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    /// Gravity scale outside of a dash, restored when a dash ends or on respawn.
    pub resting_gravity_scale: f32,
    /// Gravity scale while dashing.
    pub dash_gravity_scale: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 7.0,
            jump_force: 20.0,
            max_jumps: 2,
            landing_cooldown: 0.2,
            ground_check_radius: 0.1,
            wall_check_distance: 0.5,
            wall_jump_force_x: 16.0,
            wall_jump_force_y: 14.0,
            wall_slide_speed: 1.0,
            wall_slide_max_horizontal: 0.0,
            wall_jump_lock_time: 0.2,
            dash_force: 30.0,
            dash_duration: 0.35,
            dash_cooldown: 1.0,
            resting_gravity_scale: 10.0,
            dash_gravity_scale: 0.0,
        }
    }
}

/// A motion tuning value that cannot drive the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionConfigError {
    NoJumps,
    NonPositive { field: &'static str, value: f32 },
    Negative { field: &'static str, value: f32 },
}

impl std::fmt::Display for MotionConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoJumps => write!(f, "max_jumps must be at least 1"),
            Self::NonPositive { field, value } => {
                write!(f, "{} must be greater than zero (got {})", field, value)
            }
            Self::Negative { field, value } => {
                write!(f, "{} must not be negative (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for MotionConfigError {}

impl MotionConfig {
    /// Check that every value is usable. Called once when content is loaded.
    pub fn validate(&self) -> Result<(), MotionConfigError> {
        if self.max_jumps == 0 {
            return Err(MotionConfigError::NoJumps);
        }

        let positive = [
            ("ground_check_radius", self.ground_check_radius),
            ("wall_check_distance", self.wall_check_distance),
            ("dash_duration", self.dash_duration),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(MotionConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("landing_cooldown", self.landing_cooldown),
            ("wall_slide_speed", self.wall_slide_speed),
            ("wall_slide_max_horizontal", self.wall_slide_max_horizontal),
            ("wall_jump_lock_time", self.wall_jump_lock_time),
            ("dash_force", self.dash_force),
            ("dash_cooldown", self.dash_cooldown),
            ("resting_gravity_scale", self.resting_gravity_scale),
            ("dash_gravity_scale", self.dash_gravity_scale),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(MotionConfigError::Negative { field, value });
            }
        }

        Ok(())
    }
}
