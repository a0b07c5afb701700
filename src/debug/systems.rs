//! Debug domain: debug systems for input and runtime tracing.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::debug::state::{DebugState, MotionSnapshot};
use crate::movement::{CharacterRespawned, MotionConfig, MotionState, Player};

/// Toggle motion tracing with F3
pub(crate) fn toggle_motion_trace(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.trace_motion = !debug_state.trace_motion;
        let msg = if debug_state.trace_motion {
            "Motion trace ON"
        } else {
            "Motion trace OFF"
        };
        info!("[DEBUG] {}", msg);
    }
}

/// Log every change of phase, budget or dash availability
pub(crate) fn trace_motion_changes(
    query: Query<(Entity, &MotionState), With<Player>>,
    mut last_seen: Local<HashMap<Entity, MotionSnapshot>>,
) {
    for (entity, state) in &query {
        let snapshot = MotionSnapshot::from(state);
        if last_seen.get(&entity) == Some(&snapshot) {
            continue;
        }

        info!(
            "[DEBUG] {:?}: phase={:?} wall={:?} grounded={} jumps={} dash_allowed={}",
            entity,
            snapshot.phase,
            snapshot.wall,
            snapshot.grounded,
            snapshot.jumps_remaining,
            snapshot.dash_allowed
        );
        last_seen.insert(entity, snapshot);
    }
}

/// Force a respawn of every character with F4
pub(crate) fn force_respawn(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut respawned: MessageWriter<CharacterRespawned>,
    mut query: Query<
        (
            Entity,
            &MotionConfig,
            &mut MotionState,
            &mut Transform,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    if !keyboard.just_pressed(KeyCode::F4) {
        return;
    }

    for (entity, config, mut state, mut transform, mut velocity, mut gravity) in &mut query {
        state.respawn(
            config,
            &mut transform.translation,
            &mut velocity.0,
            &mut gravity.0,
        );
        respawned.write(CharacterRespawned { entity });
        info!("[DEBUG] Forced respawn of {:?}", entity);
    }
}
