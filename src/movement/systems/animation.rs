//! Movement domain: animation signal selection.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{AnimationTriggered, CharacterRespawned, MotionState, Player};

/// Fire an animation signal whenever the resolved state changes.
pub(crate) fn select_animation_state(
    mut query: Query<(Entity, &mut MotionState), With<Player>>,
    mut triggered: MessageWriter<AnimationTriggered>,
) {
    for (entity, mut state) in &mut query {
        if let Some(next) = state.select_animation() {
            triggered.write(AnimationTriggered {
                entity,
                state: next,
            });
        }
    }
}

/// A respawned character replays its animation from scratch.
pub(crate) fn reset_animation_on_respawn(
    mut respawned: MessageReader<CharacterRespawned>,
    mut query: Query<&mut MotionState, With<Player>>,
) {
    for event in respawned.read() {
        if let Ok(mut state) = query.get_mut(event.entity) {
            state.reset_animation();
        }
    }
}
