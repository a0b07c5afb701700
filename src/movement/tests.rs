//! Movement domain: tests for the locomotion state machine and its systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::time::Duration;

use super::systems::{handle_actions, reset_animation_on_respawn, select_animation_state};
use super::{
    AnimationState, AnimationTriggered, CharacterRespawned, JumpKind, MotionConfig,
    MotionConfigError, MotionInput, MotionPhase, MotionState, Player, SensorReadings, WallContact,
    WallPhase, missing_rig_component, resolve_wall_contact,
};

const STEP: f32 = 0.02;

fn fixed_step() -> Duration {
    Duration::from_millis(20)
}

fn grounded_state(config: &MotionConfig) -> MotionState {
    let mut state = MotionState::new(config, Vec2::ZERO);
    state.apply_sensors(SensorReadings::on_ground());
    state.update_jump_budget(config, STEP);
    state
}

/// One rendered frame followed by one fixed step, in schedule order.
fn run_frame(
    state: &mut MotionState,
    config: &MotionConfig,
    input: MotionInput,
    readings: SensorReadings,
    velocity: &mut Vec2,
    gravity: &mut f32,
    translation: &mut Vec3,
) {
    state.apply_sensors(readings);
    state.update_jump_budget(config, STEP);
    state.tick_dash_cooldown(STEP);
    state.evaluate_wall_slide(velocity.y);

    state.record_input(&input);
    if input.jump_pressed {
        state.try_jump(config, velocity);
    }
    if input.dash_pressed {
        state.try_start_dash(config, velocity, gravity);
    }
    if input.respawn_pressed {
        state.respawn(config, translation, velocity, gravity);
    }

    state.finish_dash(config, fixed_step(), gravity);
    state.resolve_velocity(config, STEP, velocity);
    velocity.y -= 9.81 * *gravity * STEP;
}

fn assert_invariants(state: &MotionState, config: &MotionConfig) {
    assert!(state.jumps_remaining <= config.max_jumps);
    assert!(state.landing_cooldown >= 0.0);
    assert!(state.wall_jump_lock >= 0.0);
    assert!(state.dash_cooldown >= 0.0);
    assert!(!(state.dashing && state.wall_sliding));
    assert!(!(state.dashing && state.is_wall_jump_locked()));
    assert!(!(state.is_wall_jump_locked() && state.wall_sliding));
    if state.touching_wall {
        assert!(state.jumps_remaining <= 1);
    }
    assert_eq!(state.dashing, state.dash_timer.is_some());
}

// -----------------------------------------------------------------------------
// Jump budget tests
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_double_jump() {
    let config = MotionConfig::default();
    let mut state = grounded_state(&config);
    assert_eq!(state.jumps_remaining, 2);

    let mut velocity = Vec2::ZERO;
    assert_eq!(state.try_jump(&config, &mut velocity), Some(JumpKind::Budget));
    assert_eq!(velocity.y, 20.0);
    assert_eq!(state.jumps_remaining, 1);

    state.apply_sensors(SensorReadings::airborne());
    velocity = Vec2::new(2.0, 4.0);
    assert_eq!(state.try_jump(&config, &mut velocity), Some(JumpKind::Budget));
    assert_eq!(velocity, Vec2::new(2.0, 20.0));
    assert_eq!(state.jumps_remaining, 0);

    velocity = Vec2::new(1.0, -3.0);
    assert_eq!(state.try_jump(&config, &mut velocity), None);
    assert_eq!(velocity, Vec2::new(1.0, -3.0));
    assert_eq!(state.jumps_remaining, 0);
}

#[test]
fn test_landing_cooldown_delays_refill() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    state.jumps_remaining = 0;
    state.apply_sensors(SensorReadings::airborne());
    assert!(!state.update_jump_budget(&config, STEP));

    state.apply_sensors(SensorReadings::on_ground());
    assert!(!state.update_jump_budget(&config, 0.15));
    assert_eq!(state.jumps_remaining, 0);

    assert!(state.update_jump_budget(&config, 0.1));
    assert_eq!(state.jumps_remaining, 2);

    // Refill happens exactly once
    assert!(!state.update_jump_budget(&config, 0.3));
    assert_eq!(state.jumps_remaining, 2);
}

#[test]
fn test_grounded_takeoff_does_not_refund_jump() {
    let config = MotionConfig::default();
    let mut state = grounded_state(&config);

    let mut velocity = Vec2::ZERO;
    state.try_jump(&config, &mut velocity);
    assert_eq!(state.jumps_remaining, 1);

    // The ground sensor still overlaps for a few frames after take-off
    for _ in 0..5 {
        assert!(!state.update_jump_budget(&config, STEP));
    }
    assert_eq!(state.jumps_remaining, 1);
}

#[test]
fn test_airborne_never_refills() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    state.jumps_remaining = 0;

    for _ in 0..100 {
        assert!(!state.replenish_if_eligible(&config, STEP));
    }
    assert_eq!(state.jumps_remaining, 0);
}

#[test]
fn test_wall_contact_caps_budget_to_one() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    state.apply_sensors(SensorReadings::against_wall(WallContact::Left));

    state.update_jump_budget(&config, STEP);
    assert_eq!(state.jumps_remaining, 1);

    let single = MotionConfig {
        max_jumps: 1,
        ..default()
    };
    let mut state = MotionState::new(&single, Vec2::ZERO);
    state.jumps_remaining = 0;
    state.apply_sensors(SensorReadings::against_wall(WallContact::Left));
    state.cap_jumps_for_wall(&single);
    assert_eq!(state.jumps_remaining, 1);
}

// -----------------------------------------------------------------------------
// Wall interaction tests
// -----------------------------------------------------------------------------

#[test]
fn test_wall_jump_grants_air_jump() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    state.apply_sensors(SensorReadings::against_wall(WallContact::Right));
    state.dash_allowed = false;
    state.jumps_remaining = 0;

    let mut velocity = Vec2::new(0.0, -1.0);
    assert_eq!(state.try_jump(&config, &mut velocity), Some(JumpKind::Wall));
    assert_eq!(velocity, Vec2::new(-16.0, 14.0));
    assert_eq!(state.wall_jump_lock, config.wall_jump_lock_time);
    assert_eq!(state.jumps_remaining, 1);
    assert!(state.dash_allowed);
    assert!(!state.wall_sliding);
    assert_eq!(state.wall_phase(), WallPhase::JumpLocked);
}

#[test]
fn test_wall_jump_pushes_away_from_left_wall() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    state.apply_sensors(SensorReadings::against_wall(WallContact::Left));

    let mut velocity = Vec2::ZERO;
    state.try_jump(&config, &mut velocity);
    assert_eq!(velocity, Vec2::new(16.0, 14.0));
}

#[test]
fn test_wall_jump_lock_suppresses_input_then_releases() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    state.apply_sensors(SensorReadings::against_wall(WallContact::Right));

    let mut velocity = Vec2::ZERO;
    state.try_jump(&config, &mut velocity);
    state.record_input(&MotionInput::axis(1.0));

    for _ in 0..9 {
        let phase = state.resolve_velocity(&config, STEP, &mut velocity);
        assert_eq!(phase, MotionPhase::WallJumpLocked);
        assert_eq!(velocity, Vec2::new(-16.0, 14.0));
    }

    // Lock is only ever decremented by fixed steps and floors at zero
    for _ in 0..2 {
        state.resolve_velocity(&config, STEP, &mut velocity);
    }
    assert!(!state.is_wall_jump_locked());
    assert_eq!(state.wall_jump_lock, 0.0);

    assert_eq!(
        state.resolve_velocity(&config, STEP, &mut velocity),
        MotionPhase::Free
    );
    assert_eq!(velocity.x, 7.0);
}

#[test]
fn test_wall_slide_requires_falling_airborne_contact() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    state.apply_sensors(SensorReadings::against_wall(WallContact::Right));

    state.evaluate_wall_slide(-1.0);
    assert!(state.wall_sliding);
    assert_eq!(state.wall_phase(), WallPhase::Sliding);

    state.evaluate_wall_slide(0.0);
    assert!(!state.wall_sliding);

    state.set_grounded(true);
    state.evaluate_wall_slide(-1.0);
    assert!(!state.wall_sliding);

    state.set_grounded(false);
    state.wall_jump_lock = 0.1;
    state.evaluate_wall_slide(-1.0);
    assert!(!state.wall_sliding);

    state.wall_jump_lock = 0.0;
    state.set_wall_contact(WallContact::None);
    state.evaluate_wall_slide(-1.0);
    assert!(!state.wall_sliding);
    assert_eq!(state.wall_phase(), WallPhase::NotTouching);
}

#[test]
fn test_wall_slide_pins_velocity() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    state.apply_sensors(SensorReadings::against_wall(WallContact::Right));
    state.evaluate_wall_slide(-5.0);

    let mut velocity = Vec2::new(5.0, -7.0);
    assert_eq!(
        state.resolve_velocity(&config, STEP, &mut velocity),
        MotionPhase::WallSliding
    );
    assert_eq!(velocity, Vec2::new(0.0, -1.0));

    let loose = MotionConfig {
        wall_slide_max_horizontal: 0.5,
        ..default()
    };
    let mut velocity = Vec2::new(5.0, -7.0);
    state.resolve_velocity(&loose, STEP, &mut velocity);
    assert_eq!(velocity, Vec2::new(0.5, -1.0));
}

// -----------------------------------------------------------------------------
// Dash tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_lifecycle() {
    let config = MotionConfig::default();
    let mut state = grounded_state(&config);
    state.record_input(&MotionInput::axis(1.0));

    let mut velocity = Vec2::new(3.0, 2.0);
    let mut gravity = config.resting_gravity_scale;
    assert!(state.try_start_dash(&config, &mut velocity, &mut gravity));
    assert_eq!(velocity, Vec2::new(30.0, 0.0));
    assert_eq!(gravity, 0.0);
    assert!(state.dashing);
    assert!(!state.dash_allowed);

    // 0.34s in, still dashing and the velocity is left alone
    for _ in 0..17 {
        assert!(!state.finish_dash(&config, fixed_step(), &mut gravity));
        assert_eq!(
            state.resolve_velocity(&config, STEP, &mut velocity),
            MotionPhase::Dashing
        );
    }
    assert!(state.dashing);
    assert_eq!(velocity, Vec2::new(30.0, 0.0));

    assert!(state.finish_dash(&config, fixed_step(), &mut gravity));
    assert!(!state.dashing);
    assert!(state.dash_timer.is_none());
    assert_eq!(gravity, config.resting_gravity_scale);
}

#[test]
fn test_dash_returns_only_after_cooldown_on_ground() {
    let config = MotionConfig::default();
    let mut state = grounded_state(&config);
    let mut velocity = Vec2::ZERO;
    let mut gravity = config.resting_gravity_scale;
    state.try_start_dash(&config, &mut velocity, &mut gravity);

    state.tick_dash_cooldown(0.5);
    assert!(!state.dash_allowed);

    state.set_grounded(false);
    state.tick_dash_cooldown(0.6);
    assert_eq!(state.dash_cooldown, 0.0);
    assert!(!state.dash_allowed);

    state.set_grounded(true);
    state.tick_dash_cooldown(STEP);
    assert!(state.dash_allowed);
}

#[test]
fn test_dash_uses_last_direction_without_input() {
    let config = MotionConfig::default();
    let mut state = grounded_state(&config);
    state.record_input(&MotionInput::axis(-1.0));
    state.record_input(&MotionInput::axis(0.0));
    assert_eq!(state.last_direction, -1.0);

    let mut velocity = Vec2::ZERO;
    let mut gravity = config.resting_gravity_scale;
    state.try_start_dash(&config, &mut velocity, &mut gravity);
    assert_eq!(velocity, Vec2::new(-30.0, 0.0));
}

#[test]
fn test_dash_while_disallowed_changes_nothing() {
    let config = MotionConfig::default();
    let mut state = grounded_state(&config);
    state.dash_allowed = false;
    let before = state.clone();

    let mut velocity = Vec2::new(1.0, 2.0);
    let mut gravity = config.resting_gravity_scale;
    assert!(!state.try_start_dash(&config, &mut velocity, &mut gravity));
    assert_eq!(state, before);
    assert_eq!(velocity, Vec2::new(1.0, 2.0));
    assert_eq!(gravity, config.resting_gravity_scale);
}

#[test]
fn test_dash_clears_wall_states_and_blocks_jump() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    state.apply_sensors(SensorReadings::against_wall(WallContact::Right));
    state.evaluate_wall_slide(-1.0);
    assert!(state.wall_sliding);

    let mut velocity = Vec2::ZERO;
    let mut gravity = config.resting_gravity_scale;
    assert!(state.try_start_dash(&config, &mut velocity, &mut gravity));
    assert!(!state.wall_sliding);
    assert!(!state.is_wall_jump_locked());

    assert_eq!(state.try_jump(&config, &mut velocity), None);
    assert_eq!(velocity, Vec2::new(30.0, 0.0));

    state.evaluate_wall_slide(-1.0);
    assert!(!state.wall_sliding);
}

// -----------------------------------------------------------------------------
// Velocity resolution tests
// -----------------------------------------------------------------------------

#[test]
fn test_resolution_priority() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    state.dashing = true;
    state.wall_sliding = true;
    state.wall_jump_lock = 0.1;
    assert_eq!(state.motion_phase(), MotionPhase::Dashing);

    state.dashing = false;
    assert_eq!(state.motion_phase(), MotionPhase::WallJumpLocked);

    state.wall_jump_lock = 0.0;
    assert_eq!(state.motion_phase(), MotionPhase::WallSliding);

    state.wall_sliding = false;
    assert_eq!(state.motion_phase(), MotionPhase::Free);
}

#[test]
fn test_free_movement_is_idempotent_across_steps() {
    let config = MotionConfig::default();
    let mut state = grounded_state(&config);
    state.record_input(&MotionInput::axis(-1.0));

    let mut velocity = Vec2::new(0.0, -2.0);
    state.resolve_velocity(&config, STEP, &mut velocity);
    let first = velocity;
    state.resolve_velocity(&config, STEP, &mut velocity);
    assert_eq!(velocity, first);
    assert_eq!(velocity, Vec2::new(-7.0, -2.0));
}

#[test]
fn test_input_axis_is_clamped() {
    let config = MotionConfig::default();
    let mut state = grounded_state(&config);
    state.record_input(&MotionInput::axis(3.0));
    assert_eq!(state.horizontal, 1.0);

    let mut velocity = Vec2::ZERO;
    state.resolve_velocity(&config, STEP, &mut velocity);
    assert_eq!(velocity.x, config.move_speed);
}

// -----------------------------------------------------------------------------
// Respawn tests
// -----------------------------------------------------------------------------

#[test]
fn test_respawn_resets_and_is_idempotent() {
    let config = MotionConfig::default();
    let spawn = Vec2::new(1.0, -3.5);
    let mut state = MotionState::new(&config, spawn);
    state.apply_sensors(SensorReadings::on_ground());

    let mut velocity = Vec2::ZERO;
    let mut gravity = config.resting_gravity_scale;
    state.try_start_dash(&config, &mut velocity, &mut gravity);
    state.jumps_remaining = 0;
    let mut translation = Vec3::new(5.0, 5.0, 1.0);

    state.respawn(&config, &mut translation, &mut velocity, &mut gravity);
    assert_eq!(translation, Vec3::new(1.0, -3.5, 1.0));
    assert_eq!(velocity, Vec2::ZERO);
    assert_eq!(gravity, config.resting_gravity_scale);
    assert!(!state.dashing);
    assert!(state.dash_timer.is_none());
    assert_eq!(state.jumps_remaining, config.max_jumps);
    assert_eq!(state.wall_jump_lock, 0.0);
    assert!(!state.wall_sliding);

    let once = state.clone();
    state.respawn(&config, &mut translation, &mut velocity, &mut gravity);
    assert_eq!(state, once);
    assert_eq!(translation, Vec3::new(1.0, -3.5, 1.0));
}

#[test]
fn test_respawn_against_wall_keeps_wall_cap() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::new(0.0, -3.5));
    let mut velocity = Vec2::ZERO;
    let mut gravity = config.resting_gravity_scale;
    let mut translation = Vec3::new(11.5, 2.0, 1.0);

    run_frame(
        &mut state,
        &config,
        MotionInput::axis(0.0).with_respawn(),
        SensorReadings::against_wall(WallContact::Right),
        &mut velocity,
        &mut gravity,
        &mut translation,
    );

    // Contacts from before the teleport are dropped
    assert!(!state.touching_wall);
    assert!(!state.grounded);
    assert_eq!(state.jumps_remaining, config.max_jumps);
    assert_invariants(&state, &config);

    // Landing at the spawn point still waits out the cooldown
    run_frame(
        &mut state,
        &config,
        MotionInput::default(),
        SensorReadings::on_ground(),
        &mut velocity,
        &mut gravity,
        &mut translation,
    );
    assert_eq!(state.landing_cooldown, config.landing_cooldown - STEP);
    assert_invariants(&state, &config);
}

#[test]
fn test_respawn_cancels_pending_dash_end() {
    let config = MotionConfig::default();
    let mut state = grounded_state(&config);
    let mut velocity = Vec2::ZERO;
    let mut gravity = config.resting_gravity_scale;
    let mut translation = Vec3::ZERO;

    state.try_start_dash(&config, &mut velocity, &mut gravity);
    state.respawn(&config, &mut translation, &mut velocity, &mut gravity);

    // No stale dash end fires afterwards
    gravity = 3.0;
    for _ in 0..20 {
        assert!(!state.finish_dash(&config, fixed_step(), &mut gravity));
    }
    assert_eq!(gravity, 3.0);
}

// -----------------------------------------------------------------------------
// Sensor tests
// -----------------------------------------------------------------------------

#[test]
fn test_right_wall_wins_tie() {
    assert_eq!(resolve_wall_contact(true, true), WallContact::Right);
    assert_eq!(resolve_wall_contact(true, false), WallContact::Left);
    assert_eq!(resolve_wall_contact(false, true), WallContact::Right);
    assert_eq!(resolve_wall_contact(false, false), WallContact::None);
}

#[test]
fn test_wall_direction_survives_losing_contact() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    state.set_wall_contact(WallContact::Left);
    assert_eq!(state.wall_direction, -1.0);

    state.set_wall_contact(WallContact::None);
    assert!(!state.touching_wall);
    assert_eq!(state.wall_direction, -1.0);
}

// -----------------------------------------------------------------------------
// Presentation tests
// -----------------------------------------------------------------------------

#[test]
fn test_animation_fires_only_on_change() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);

    assert_eq!(state.select_animation(), Some(AnimationState::Airborne));
    assert_eq!(state.select_animation(), None);

    state.set_grounded(true);
    assert_eq!(state.select_animation(), Some(AnimationState::Idle));

    state.record_input(&MotionInput::axis(1.0));
    assert_eq!(state.select_animation(), Some(AnimationState::Moving));

    state.set_grounded(false);
    state.set_wall_contact(WallContact::Right);
    state.evaluate_wall_slide(-1.0);
    assert_eq!(state.select_animation(), Some(AnimationState::Sliding));
}

#[test]
fn test_animation_skipped_while_dashing() {
    let config = MotionConfig::default();
    let mut state = grounded_state(&config);
    assert_eq!(state.select_animation(), Some(AnimationState::Idle));

    let mut velocity = Vec2::ZERO;
    let mut gravity = config.resting_gravity_scale;
    state.try_start_dash(&config, &mut velocity, &mut gravity);
    state.set_grounded(false);
    assert_eq!(state.select_animation(), None);
    assert_eq!(state.animation, Some(AnimationState::Idle));
}

#[test]
fn test_trigger_names() {
    assert_eq!(AnimationState::Idle.trigger_name(), "Idle");
    assert_eq!(AnimationState::Moving.trigger_name(), "Walk");
    assert_eq!(AnimationState::Airborne.trigger_name(), "Jump");
    assert_eq!(AnimationState::Sliding.trigger_name(), "Wall");
}

#[test]
fn test_sprite_faces_away_from_wall_while_sliding() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    assert!(!state.sprite_flipped());

    state.record_input(&MotionInput::axis(-1.0));
    assert!(state.sprite_flipped());

    state.record_input(&MotionInput::axis(1.0));
    state.set_wall_contact(WallContact::Right);
    state.evaluate_wall_slide(-1.0);
    assert!(state.sprite_flipped());

    state.set_wall_contact(WallContact::Left);
    assert!(!state.sprite_flipped());
}

// -----------------------------------------------------------------------------
// Config and rig tests
// -----------------------------------------------------------------------------

#[test]
fn test_config_validation() {
    assert_eq!(MotionConfig::default().validate(), Ok(()));

    let no_jumps = MotionConfig {
        max_jumps: 0,
        ..default()
    };
    assert_eq!(no_jumps.validate(), Err(MotionConfigError::NoJumps));

    let no_radius = MotionConfig {
        ground_check_radius: 0.0,
        ..default()
    };
    assert!(matches!(
        no_radius.validate(),
        Err(MotionConfigError::NonPositive {
            field: "ground_check_radius",
            ..
        })
    ));

    let negative_cooldown = MotionConfig {
        dash_cooldown: -1.0,
        ..default()
    };
    assert!(matches!(
        negative_cooldown.validate(),
        Err(MotionConfigError::Negative {
            field: "dash_cooldown",
            ..
        })
    ));

    let nan_duration = MotionConfig {
        dash_duration: f32::NAN,
        ..default()
    };
    assert!(nan_duration.validate().is_err());
}

#[test]
fn test_missing_rig_component() {
    assert_eq!(missing_rig_component(true, true, true, true, true), None);
    assert_eq!(
        missing_rig_component(true, false, true, true, true),
        Some("SensorRig")
    );
    assert_eq!(
        missing_rig_component(false, false, false, false, false),
        Some("MotionConfig")
    );
}

// -----------------------------------------------------------------------------
// Scripted run
// -----------------------------------------------------------------------------

#[test]
fn test_invariants_hold_over_scripted_run() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::new(0.0, -3.5));
    let mut velocity = Vec2::ZERO;
    let mut gravity = config.resting_gravity_scale;
    let mut translation = Vec3::new(0.0, -3.5, 1.0);

    let ground = SensorReadings::on_ground();
    let air = SensorReadings::airborne();
    let right_wall = SensorReadings::against_wall(WallContact::Right);

    let script: Vec<(MotionInput, SensorReadings)> = [
        vec![(MotionInput::axis(1.0), ground); 20],
        vec![(MotionInput::axis(1.0).with_jump(), ground)],
        vec![(MotionInput::axis(1.0), air); 10],
        vec![(MotionInput::axis(1.0).with_jump(), air)],
        vec![(MotionInput::axis(1.0), right_wall); 15],
        vec![(MotionInput::axis(0.0).with_jump(), right_wall)],
        vec![(MotionInput::axis(-1.0).with_dash(), air)],
        vec![(MotionInput::axis(-1.0).with_jump(), air); 5],
        vec![(MotionInput::axis(0.0), air); 20],
        vec![(MotionInput::axis(0.0), ground); 60],
        vec![(MotionInput::axis(1.0).with_dash(), right_wall)],
        vec![(MotionInput::axis(0.0).with_respawn(), right_wall)],
        vec![(MotionInput::axis(0.0), ground); 20],
    ]
    .concat();

    for (input, readings) in script {
        run_frame(
            &mut state,
            &config,
            input,
            readings,
            &mut velocity,
            &mut gravity,
            &mut translation,
        );
        assert_invariants(&state, &config);
    }

    assert_eq!(translation.truncate(), state.spawn_position);
    assert_eq!(state.jumps_remaining, config.max_jumps);
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct Fired(Vec<AnimationState>);

fn collect_animation(mut reader: MessageReader<AnimationTriggered>, mut fired: ResMut<Fired>) {
    fired.0.extend(reader.read().map(|message| message.state));
}

#[derive(Resource, Default)]
struct Respawns(usize);

fn count_respawns(mut reader: MessageReader<CharacterRespawned>, mut respawns: ResMut<Respawns>) {
    respawns.0 += reader.read().count();
}

#[test]
fn test_select_animation_state_writes_changes_only() {
    let config = MotionConfig::default();
    let mut app = App::new();
    app.init_resource::<Fired>()
        .add_message::<AnimationTriggered>()
        .add_systems(Update, (select_animation_state, collect_animation).chain());

    let entity = app
        .world_mut()
        .spawn((Player, MotionState::new(&config, Vec2::ZERO)))
        .id();

    app.update();
    app.update();
    assert_eq!(app.world().resource::<Fired>().0, vec![AnimationState::Airborne]);

    if let Some(mut state) = app.world_mut().get_mut::<MotionState>(entity) {
        state.set_grounded(true);
    }
    app.update();
    assert_eq!(
        app.world().resource::<Fired>().0,
        vec![AnimationState::Airborne, AnimationState::Idle]
    );
}

#[test]
fn test_respawn_replays_animation_signal() {
    let config = MotionConfig::default();
    let mut app = App::new();
    app.init_resource::<Fired>()
        .init_resource::<MotionInput>()
        .add_message::<CharacterRespawned>()
        .add_message::<AnimationTriggered>()
        .add_systems(
            Update,
            (
                handle_actions,
                reset_animation_on_respawn,
                select_animation_state,
                collect_animation,
            )
                .chain(),
        );

    app.world_mut().spawn((
        Player,
        MotionState::new(&config, Vec2::ZERO),
        Transform::default(),
        LinearVelocity::default(),
        GravityScale(config.resting_gravity_scale),
        config.clone(),
    ));

    app.update();
    app.update();
    assert_eq!(app.world().resource::<Fired>().0, vec![AnimationState::Airborne]);

    app.insert_resource(MotionInput::default().with_respawn());
    app.update();
    assert_eq!(
        app.world().resource::<Fired>().0,
        vec![AnimationState::Airborne, AnimationState::Airborne]
    );
}

#[test]
fn test_reset_animation_fires_same_signal_again() {
    let config = MotionConfig::default();
    let mut state = MotionState::new(&config, Vec2::ZERO);
    assert_eq!(state.select_animation(), Some(AnimationState::Airborne));
    assert_eq!(state.select_animation(), None);

    state.reset_animation();
    assert_eq!(state.select_animation(), Some(AnimationState::Airborne));
}

#[test]
fn test_handle_actions_respawns_and_reports() {
    let config = MotionConfig::default();
    let spawn = Vec2::new(2.0, -3.5);
    let mut app = App::new();
    app.init_resource::<Respawns>()
        .insert_resource(MotionInput::axis(1.0).with_respawn())
        .add_message::<CharacterRespawned>()
        .add_systems(Update, (handle_actions, count_respawns).chain());

    let entity = app
        .world_mut()
        .spawn((
            Player,
            MotionState::new(&config, spawn),
            Transform::from_xyz(8.0, 4.0, 1.0),
            LinearVelocity(Vec2::new(3.0, -9.0)),
            GravityScale(0.0),
            config.clone(),
        ))
        .id();

    app.update();

    assert_eq!(app.world().resource::<Respawns>().0, 1);
    let world = app.world();
    assert_eq!(
        world.get::<Transform>(entity).map(|t| t.translation),
        Some(Vec3::new(2.0, -3.5, 1.0))
    );
    assert_eq!(
        world.get::<LinearVelocity>(entity).map(|v| v.0),
        Some(Vec2::ZERO)
    );
    assert_eq!(
        world.get::<GravityScale>(entity).map(|g| g.0),
        Some(config.resting_gravity_scale)
    );
}
