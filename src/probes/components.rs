//! Probes domain: components for probes, their lights and anchor slots.

use bevy::prelude::*;

/// Slot a probe can float toward. Spawned as a child of the player.
#[derive(Component, Debug, Clone, Copy)]
pub struct ProbeAnchor {
    pub slot: usize,
}

/// A color probe following one of the anchor slots.
#[derive(Component, Debug, Clone, Copy)]
pub struct Probe {
    pub index: usize,
    /// Phase of the float bob, so probes do not move in lockstep.
    pub time_offset: f32,
}

/// Light child of a probe, shown or hidden by its toggle key.
#[derive(Component, Debug, Clone, Copy)]
pub struct ProbeLight {
    pub index: usize,
}
