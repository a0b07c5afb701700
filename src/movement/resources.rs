//! Movement domain: the per-frame input snapshot.

use bevy::prelude::*;

/// Number of color probes that can be toggled from the keyboard.
pub const PROBE_COUNT: usize = 3;

/// Input sampled once per frame, before any fixed step consumes it.
///
/// Button fields are edges: true only on the frame the key went down.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionInput {
    /// Raw horizontal axis in [-1, 1].
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub dash_pressed: bool,
    pub respawn_pressed: bool,
    pub probe_toggles: [bool; PROBE_COUNT],
}

impl MotionInput {
    pub fn axis(horizontal: f32) -> Self {
        Self {
            horizontal,
            ..default()
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump_pressed = true;
        self
    }

    pub fn with_dash(mut self) -> Self {
        self.dash_pressed = true;
        self
    }

    pub fn with_respawn(mut self) -> Self {
        self.respawn_pressed = true;
        self
    }
}
