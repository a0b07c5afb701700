//! Probes domain: the three color probes floating around the player.

mod components;
mod events;
mod resources;
mod systems;


pub use components::{Probe, ProbeAnchor, ProbeLight};
pub use events::ProbeToggled;
pub use resources::{ProbeSettings, ProbeSwapper, SwapBurst};

use bevy::prelude::*;

use crate::probes::systems::{
    aim_probes_at_cursor, follow_probe_anchors, forward_probe_toggles, setup_probe_swapper,
    spawn_probes, toggle_probe_lights, update_probe_swaps,
};

pub struct ProbesPlugin;

impl Plugin for ProbesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProbeSettings>()
            .add_message::<ProbeToggled>()
            .add_systems(Startup, setup_probe_swapper)
            .add_systems(PostStartup, spawn_probes)
            .add_systems(
                Update,
                (
                    (forward_probe_toggles, toggle_probe_lights).chain(),
                    (update_probe_swaps, follow_probe_anchors, aim_probes_at_cursor).chain(),
                ),
            );
    }
}
