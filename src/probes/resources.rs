//! Probes domain: tuning and the seeded slot swapper.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

use crate::movement::PROBE_COUNT;

/// Tuning for probe float and swap behavior.
#[derive(Resource, Debug, Clone)]
pub struct ProbeSettings {
    /// Lerp rate toward the target position, per second.
    pub follow_speed: f32,
    pub float_amplitude: f32,
    /// Bob frequency in radians per second.
    pub float_frequency: f32,
    /// Seconds between swap bursts, rolled uniformly in [min, max).
    pub swap_interval_min: f32,
    pub swap_interval_max: f32,
    pub swaps_per_cycle: u32,
    /// Seconds between rotations inside one burst.
    pub swap_delay: f32,
    pub light_starts_on: bool,
    /// Anchor offsets from the player's origin, one per slot.
    pub anchor_offsets: [Vec2; PROBE_COUNT],
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            follow_speed: 5.0,
            float_amplitude: 0.3,
            float_frequency: 1.0,
            swap_interval_min: 5.0,
            swap_interval_max: 10.0,
            swaps_per_cycle: 4,
            swap_delay: 0.15,
            light_starts_on: false,
            anchor_offsets: [
                Vec2::new(-0.9, 0.8),
                Vec2::new(0.0, 1.2),
                Vec2::new(0.9, 0.8),
            ],
        }
    }
}

/// A running burst of slot rotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapBurst {
    pub swaps_done: u32,
    /// Seconds until the next rotation.
    pub delay: f32,
}

/// Owns which anchor slot each probe follows and when they rotate.
#[derive(Resource, Debug)]
pub struct ProbeSwapper {
    rng: ChaCha8Rng,
    /// Anchor slot followed by each probe, indexed by probe.
    pub assignments: [usize; PROBE_COUNT],
    /// Seconds until the next burst starts.
    pub swap_timer: f32,
    pub burst: Option<SwapBurst>,
}

impl ProbeSwapper {
    /// Shuffle the initial assignment and roll the first burst delay.
    pub fn new(seed: u64, settings: &ProbeSettings) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut assignments: [usize; PROBE_COUNT] = std::array::from_fn(|i| i);
        assignments.shuffle(&mut rng);
        let swap_timer = roll_interval(&mut rng, settings);

        Self {
            rng,
            assignments,
            swap_timer,
            burst: None,
        }
    }

    /// Random bob phase for a newly spawned probe.
    pub fn roll_time_offset(&mut self) -> f32 {
        self.rng.random_range(0.0..TAU)
    }

    /// Every probe moves to the slot of the next one; the last takes the first.
    pub fn rotate(&mut self) {
        self.assignments.rotate_left(1);
    }

    /// Advance the swap clock. Returns the swap number when a rotation
    /// happened on this tick.
    pub fn tick(&mut self, settings: &ProbeSettings, dt: f32) -> Option<u32> {
        let Some(mut burst) = self.burst else {
            self.swap_timer -= dt;
            if self.swap_timer <= 0.0 {
                // First rotation lands on the next tick
                self.burst = Some(SwapBurst {
                    swaps_done: 0,
                    delay: 0.0,
                });
            }
            return None;
        };

        burst.delay -= dt;
        if burst.delay > 0.0 {
            self.burst = Some(burst);
            return None;
        }

        self.rotate();
        burst.swaps_done += 1;
        let swap_number = burst.swaps_done;

        if burst.swaps_done >= settings.swaps_per_cycle {
            self.burst = None;
            self.swap_timer = roll_interval(&mut self.rng, settings);
        } else {
            burst.delay = settings.swap_delay;
            self.burst = Some(burst);
        }

        Some(swap_number)
    }
}

fn roll_interval(rng: &mut ChaCha8Rng, settings: &ProbeSettings) -> f32 {
    if settings.swap_interval_max <= settings.swap_interval_min {
        return settings.swap_interval_min;
    }
    rng.random_range(settings.swap_interval_min..settings.swap_interval_max)
}
