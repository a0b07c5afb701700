//! Probes domain: messages for probe interaction.

use bevy::ecs::message::Message;

/// Message fired when the toggle key of a probe is pressed.
#[derive(Debug, Clone, Copy)]
pub struct ProbeToggled {
    pub index: usize,
}

impl Message for ProbeToggled {}
