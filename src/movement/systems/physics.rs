//! Movement domain: fixed-step velocity resolution.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MotionConfig, MotionPhase, MotionState, Player};

/// Ends dashes whose timer ran out during this fixed step.
pub(crate) fn finish_dash(
    time: Res<Time>,
    mut query: Query<(&MotionConfig, &mut MotionState, &mut GravityScale), With<Player>>,
) {
    for (config, mut state, mut gravity) in &mut query {
        if state.dash_timer.is_none() {
            continue;
        }

        if state.finish_dash(config, time.delta(), &mut gravity.0) {
            debug!("Dash ended: gravity_scale={}", gravity.0);
        }
    }
}

pub(crate) fn resolve_velocities(
    time: Res<Time>,
    mut query: Query<(&MotionConfig, &mut MotionState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (config, mut state, mut velocity) in &mut query {
        let phase = state.resolve_velocity(config, dt, &mut velocity.0);

        if phase == MotionPhase::WallJumpLocked && !state.is_wall_jump_locked() {
            debug!("Wall jump lock released");
        }
    }
}
