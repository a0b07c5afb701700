//! Movement domain: input-phase bookkeeping and triggered actions.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    CharacterRespawned, JumpKind, MotionConfig, MotionInput, MotionState, Player,
};

pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<(&MotionConfig, &mut MotionState), With<Player>>,
) {
    let dt = time.delta_secs();

    for (config, mut state) in &mut query {
        if state.update_jump_budget(config, dt) {
            debug!("Jump budget refilled to {}", state.jumps_remaining);
        }

        let was_allowed = state.dash_allowed;
        state.tick_dash_cooldown(dt);
        if state.dash_allowed && !was_allowed {
            debug!("Dash available again");
        }
    }
}

pub(crate) fn update_wall_interaction(
    mut query: Query<(&LinearVelocity, &mut MotionState), With<Player>>,
) {
    for (velocity, mut state) in &mut query {
        let was_sliding = state.wall_sliding;
        state.evaluate_wall_slide(velocity.y);

        if state.wall_sliding && !was_sliding {
            debug!("Wall slide started: wall_direction={}", state.wall_direction);
        }
    }
}

pub(crate) fn handle_actions(
    input: Res<MotionInput>,
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
    for (entity, config, mut state, mut transform, mut velocity, mut gravity) in &mut query {
        state.record_input(&input);

        if input.jump_pressed {
            match state.try_jump(config, &mut velocity.0) {
                Some(JumpKind::Wall) => debug!(
                    "Wall jump: wall_direction={}, jumps_remaining={}",
                    state.wall_direction, state.jumps_remaining
                ),
                Some(JumpKind::Budget) => {
                    debug!("Jump: jumps_remaining now {}", state.jumps_remaining)
                }
                None => {}
            }
        }

        if input.dash_pressed && state.try_start_dash(config, &mut velocity.0, &mut gravity.0) {
            debug!("Dash started: velocity={:?}", velocity.0);
        }

        if input.respawn_pressed {
            state.respawn(
                config,
                &mut transform.translation,
                &mut velocity.0,
                &mut gravity.0,
            );
            respawned.write(CharacterRespawned { entity });
            info!("Respawned at {:?}", state.spawn_position);
        }
    }
}
