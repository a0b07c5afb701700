//! Movement domain: locomotion state machine plugin wiring and public exports.
//!
//! Frame layout:
//! - before the fixed main loop: input sampling, sensors, timer bookkeeping,
//!   wall evaluation and triggered actions
//! - `FixedUpdate`: dash end and velocity resolution
//! - `Update`: animation reset after respawn, then signal selection

mod bootstrap;
mod components;
mod config;
mod events;
mod level;
mod resources;
mod sensors;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use bootstrap::{CHARACTER_SIZE, MotionRigError, missing_rig_component, spawn_character};
pub use components::{GameLayer, Ground, Player, SensorRig, Wall};
pub use config::{MotionConfig, MotionConfigError};
pub use events::{AnimationTriggered, CharacterRespawned};
pub use resources::{MotionInput, PROBE_COUNT};
pub use sensors::{SensorReadings, WallContact, resolve_wall_contact};
pub use state::{AnimationState, JumpKind, MotionPhase, MotionState, WallPhase};

use bevy::app::{RunFixedMainLoop, RunFixedMainLoopSystems};
use bevy::prelude::*;

use crate::movement::bootstrap::{spawn_characters_from_data, validate_motion_rigs};
use crate::movement::level::spawn_test_room;
use crate::movement::systems::{
    detect_ground, detect_walls, finish_dash, handle_actions, read_input,
    reset_animation_on_respawn, resolve_velocities, update_timers, update_wall_interaction,
};

pub(crate) use crate::movement::systems::select_animation_state;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionInput>()
            .register_type::<MotionConfig>()
            .add_message::<AnimationTriggered>()
            .add_message::<CharacterRespawned>()
            .add_systems(Startup, (spawn_test_room, spawn_characters_from_data))
            .add_systems(PostStartup, validate_motion_rigs)
            .add_systems(
                RunFixedMainLoop,
                (
                    read_input,
                    detect_ground,
                    detect_walls,
                    update_timers,
                    update_wall_interaction,
                    handle_actions,
                )
                    .chain()
                    .in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop),
            )
            .add_systems(FixedUpdate, (finish_dash, resolve_velocities).chain())
            .add_systems(
                Update,
                (reset_animation_on_respawn, select_animation_state).chain(),
            );
    }
}
