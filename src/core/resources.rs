//! Core domain: shared resources for run configuration.

use bevy::prelude::*;
use rand::Rng;

/// Fixed physics step rate in Hz.
pub const FIXED_STEP_HZ: f64 = 50.0;

/// World gravity, in units per second squared.
pub const GRAVITY: f32 = 9.81;

/// Pixels per world unit for the gameplay camera.
pub const PIXELS_PER_UNIT: f32 = 40.0;

/// Resource describing the current run.
#[derive(Resource, Debug, Clone)]
pub struct RunConfig {
    /// Seed for every random source in the run (probe swaps).
    pub seed: u64,
    /// Character to spawn; `None` picks the first loaded definition.
    pub character_id: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
            character_id: None,
        }
    }
}
