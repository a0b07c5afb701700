//! Core domain: run configuration, timestep, gravity and camera.

mod resources;
mod systems;

use avian2d::prelude::*;
use bevy::prelude::*;

pub use resources::{FIXED_STEP_HZ, GRAVITY, PIXELS_PER_UNIT, RunConfig};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunConfig>()
            .insert_resource(Time::<Fixed>::from_hz(FIXED_STEP_HZ))
            .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
            .add_systems(Startup, (systems::setup_camera, systems::log_run_start));
    }
}
