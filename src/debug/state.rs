//! Debug domain: state for motion tracing.

use bevy::prelude::*;

use crate::movement::{MotionPhase, MotionState, WallPhase};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether motion state changes are logged
    pub trace_motion: bool,
}

/// The parts of a character's motion state worth tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSnapshot {
    pub phase: MotionPhase,
    pub wall: WallPhase,
    pub grounded: bool,
    pub jumps_remaining: u8,
    pub dash_allowed: bool,
}

impl From<&MotionState> for MotionSnapshot {
    fn from(state: &MotionState) -> Self {
        Self {
            phase: state.motion_phase(),
            wall: state.wall_phase(),
            grounded: state.grounded,
            jumps_remaining: state.jumps_remaining,
            dash_allowed: state.dash_allowed,
        }
    }
}
