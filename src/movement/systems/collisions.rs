//! Movement domain: ground and wall detection systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, MotionConfig, MotionState, Player, SensorRig, WallContact, resolve_wall_contact,
};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &SensorRig, &MotionConfig, &mut MotionState), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, rig, config, mut state) in &mut query {
        let was_on_ground = state.grounded;

        // Overlap a small circle at the feet
        let origin = transform.translation.truncate() + rig.ground_offset;
        let probe = Collider::circle(config.ground_check_radius);
        let hits = spatial_query.shape_intersections(&probe, origin, 0.0, &ground_filter);

        state.set_grounded(!hits.is_empty());

        if state.grounded && !was_on_ground {
            debug!(
                "Landed: jumps_remaining={}, dash_allowed={}",
                state.jumps_remaining, state.dash_allowed
            );
        } else if !state.grounded && was_on_ground {
            debug!("Left ground: jumps_remaining={}", state.jumps_remaining);
        }
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &SensorRig, &MotionConfig, &mut MotionState), With<Player>>,
) {
    // Filter to only hit Wall layer entities
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, rig, config, mut state) in &mut query {
        let was_on_wall = state.touching_wall;
        let origin = transform.translation.truncate() + rig.wall_offset;

        // Check left
        let left_hit = spatial_query.cast_ray(
            origin,
            Dir2::NEG_X,
            config.wall_check_distance,
            true,
            &wall_filter,
        );

        // Check right
        let right_hit = spatial_query.cast_ray(
            origin,
            Dir2::X,
            config.wall_check_distance,
            true,
            &wall_filter,
        );

        let contact = resolve_wall_contact(left_hit.is_some(), right_hit.is_some());
        state.set_wall_contact(contact);

        if contact != WallContact::None && !was_on_wall {
            debug!("Touched wall: {:?}", contact);
        }
    }
}
