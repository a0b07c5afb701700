//! Debug mode for fast iteration on movement tuning.
//!
//! Features:
//! - F3 toggles motion tracing (phase, jump budget and dash changes)
//! - F4 forces every character back to its spawn point

mod state;
mod systems;

use bevy::prelude::*;

pub use state::{DebugState, MotionSnapshot};

use crate::debug::systems::{force_respawn, toggle_motion_trace, trace_motion_changes};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_motion_trace, force_respawn))
            .add_systems(
                Update,
                trace_motion_changes
                    .after(toggle_motion_trace)
                    .run_if(|state: Res<DebugState>| state.trace_motion),
            );
    }
}
