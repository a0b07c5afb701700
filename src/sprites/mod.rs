//! Sprites module for character presentation.
//!
//! This module handles:
//! - Playing animations requested by the locomotion state machine
//! - Flipping character sprites to their facing

pub mod animation;
pub mod facing;

use bevy::prelude::*;

pub use animation::*;
pub use animation::AnimationPlayer;
pub use facing::*;

use crate::movement::select_animation_state;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                apply_animation_triggers.after(select_animation_state),
                sync_sprite_facing,
            ),
        );
    }
}
