//! Animation playback driven by locomotion triggers.
//!
//! Characters are drawn as flat quads, so each animation is shown as a tint
//! on the body sprite until real clips exist.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{AnimationState, AnimationTriggered};

/// Component receiving animation triggers for one character.
#[derive(Component, Debug, Default)]
pub struct AnimationPlayer {
    /// Animation currently playing. `None` until the first trigger.
    pub current: Option<AnimationState>,
    /// Trigger name of the current animation.
    pub trigger: Option<&'static str>,
}

impl AnimationPlayer {
    /// Switch to a new animation. Returns false if it was already playing.
    pub fn play(&mut self, state: AnimationState) -> bool {
        if self.current == Some(state) {
            return false;
        }
        self.current = Some(state);
        self.trigger = Some(state.trigger_name());
        true
    }
}

/// Body tint shown for each animation.
pub fn animation_tint(state: AnimationState) -> Color {
    match state {
        AnimationState::Idle => Color::srgb(0.9, 0.9, 0.95),
        AnimationState::Moving => Color::srgb(0.75, 0.9, 1.0),
        AnimationState::Airborne => Color::srgb(1.0, 0.95, 0.7),
        AnimationState::Sliding => Color::srgb(0.85, 0.7, 1.0),
    }
}

/// System applying animation triggers to their characters.
pub fn apply_animation_triggers(
    mut triggers: MessageReader<AnimationTriggered>,
    mut players: Query<(&mut AnimationPlayer, &mut Sprite)>,
) {
    for trigger in triggers.read() {
        let Ok((mut player, mut sprite)) = players.get_mut(trigger.entity) else {
            continue;
        };

        if player.play(trigger.state) {
            sprite.color = animation_tint(trigger.state);
            debug!(
                "Animation trigger {} on {:?}",
                trigger.state.trigger_name(),
                trigger.entity
            );
        }
    }
}
