//! Movement domain: messages emitted by the locomotion state machine.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::AnimationState;

/// Message fired when a character's animation signal changes.
#[derive(Debug)]
pub struct AnimationTriggered {
    pub entity: Entity,
    pub state: AnimationState,
}

impl Message for AnimationTriggered {}

/// Message fired after a character was put back at its spawn point.
#[derive(Debug)]
pub struct CharacterRespawned {
    pub entity: Entity,
}

impl Message for CharacterRespawned {}
