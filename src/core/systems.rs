//! Core domain: world setup systems.

use bevy::prelude::*;

use crate::core::resources::{PIXELS_PER_UNIT, RunConfig};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn log_run_start(run_config: Res<RunConfig>) {
    info!(
        "Starting run with seed: {}, character: {}",
        run_config.seed,
        run_config.character_id.as_deref().unwrap_or("<default>")
    );
}
