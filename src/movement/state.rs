//! Movement domain: the character's motion state machine.
//!
//! All transitions are methods on [`MotionState`]. The systems in
//! `movement::systems` only gather inputs, call these in frame order and
//! log the outcome, so the same sequence can be driven directly in tests.
//!
//! Per frame, the input phase runs sensors, timer bookkeeping, wall
//! evaluation and then the triggered actions (jump, dash, respawn). Each
//! fixed step afterwards resolves velocity with the priority
//! dash > wall-jump lock > wall slide > free movement.

use std::time::Duration;

use bevy::prelude::*;

use crate::movement::{MotionConfig, MotionInput, SensorReadings, WallContact};

/// Named animation signals understood by the animation player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    Idle,
    Moving,
    Airborne,
    Sliding,
}

impl AnimationState {
    /// Trigger name sent to the animation player.
    pub fn trigger_name(self) -> &'static str {
        match self {
            AnimationState::Idle => "Idle",
            AnimationState::Moving => "Walk",
            AnimationState::Airborne => "Jump",
            AnimationState::Sliding => "Wall",
        }
    }
}

/// Wall interaction sub-machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallPhase {
    NotTouching,
    Sliding,
    JumpLocked,
}

/// The velocity writer that owns a fixed step, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    Dashing,
    WallJumpLocked,
    WallSliding,
    Free,
}

/// How an accepted jump edge was spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Paid for from the jump budget.
    Budget,
    /// Pushed off a wall; does not go through the budget.
    Wall,
}

/// Everything the locomotion state machine knows about one character.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MotionState {
    /// Horizontal input for the current frame.
    pub horizontal: f32,
    /// Sign of the last non-zero horizontal input.
    pub last_direction: f32,
    pub grounded: bool,
    pub touching_wall: bool,
    /// +1 when the last wall contact was on the right, -1 on the left.
    pub wall_direction: f32,
    pub wall_sliding: bool,
    pub jumps_remaining: u8,
    /// Counts down while grounded; the jump budget refills when it hits zero.
    pub landing_cooldown: f32,
    pub dashing: bool,
    pub dash_allowed: bool,
    /// Counts down only while `dash_allowed` is false.
    pub dash_cooldown: f32,
    /// Pending dash end. Replaced on a new dash, cleared on respawn.
    pub dash_timer: Option<Timer>,
    /// Seconds left in the wall-jump lock. Only fixed steps advance it.
    pub wall_jump_lock: f32,
    /// Last animation signal fired.
    pub animation: Option<AnimationState>,
    pub facing_right: bool,
    pub spawn_position: Vec2,
    grounded_last_tick: bool,
}

impl MotionState {
    pub fn new(config: &MotionConfig, spawn_position: Vec2) -> Self {
        Self {
            horizontal: 0.0,
            last_direction: 1.0,
            grounded: false,
            touching_wall: false,
            wall_direction: 1.0,
            wall_sliding: false,
            jumps_remaining: config.max_jumps,
            landing_cooldown: 0.0,
            dashing: false,
            dash_allowed: true,
            dash_cooldown: 0.0,
            dash_timer: None,
            wall_jump_lock: 0.0,
            animation: None,
            facing_right: true,
            spawn_position,
            grounded_last_tick: false,
        }
    }

    // ------------------------------------------------------------------
    // Input and sensors
    // ------------------------------------------------------------------

    /// Store this frame's horizontal input and update facing.
    pub fn record_input(&mut self, input: &MotionInput) {
        self.horizontal = input.horizontal.clamp(-1.0, 1.0);
        if self.horizontal != 0.0 {
            self.last_direction = self.horizontal.signum();
            self.facing_right = self.horizontal > 0.0;
        }
    }

    pub fn apply_sensors(&mut self, readings: SensorReadings) {
        self.set_grounded(readings.grounded);
        self.set_wall_contact(readings.wall);
    }

    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    /// Without contact the previous wall direction is kept.
    pub fn set_wall_contact(&mut self, wall: WallContact) {
        self.touching_wall = wall != WallContact::None;
        if let Some(direction) = wall.direction() {
            self.wall_direction = direction;
        }
    }

    // ------------------------------------------------------------------
    // Jump budget
    // ------------------------------------------------------------------

    /// Per-frame budget bookkeeping: landing detection, refill, wall cap.
    /// Returns true when the budget was refilled this frame.
    pub fn update_jump_budget(&mut self, config: &MotionConfig, dt: f32) -> bool {
        if self.grounded && !self.grounded_last_tick {
            self.landing_cooldown = config.landing_cooldown;
        }
        self.grounded_last_tick = self.grounded;

        let replenished = self.replenish_if_eligible(config, dt);
        self.cap_jumps_for_wall(config);
        replenished
    }

    /// Refill the budget once the landing cooldown has run out on the ground.
    pub fn replenish_if_eligible(&mut self, config: &MotionConfig, dt: f32) -> bool {
        if !self.grounded {
            return false;
        }

        self.landing_cooldown = (self.landing_cooldown - dt).max(0.0);
        if self.landing_cooldown <= 0.0 && self.jumps_remaining != config.max_jumps {
            self.jumps_remaining = config.max_jumps;
            self.landing_cooldown = config.landing_cooldown;
            return true;
        }
        false
    }

    /// Wall contact leaves exactly one jump.
    pub fn cap_jumps_for_wall(&mut self, config: &MotionConfig) {
        if self.touching_wall {
            self.jumps_remaining = config.max_jumps.min(1);
        }
    }

    /// Spend one jump and launch upward. Horizontal velocity is untouched.
    pub fn consume_jump(&mut self, config: &MotionConfig, velocity: &mut Vec2) -> bool {
        if self.jumps_remaining == 0 {
            return false;
        }

        self.jumps_remaining -= 1;
        velocity.y = config.jump_force;
        if self.grounded {
            // Still overlapping the ground for a few frames after take-off.
            self.landing_cooldown = config.landing_cooldown;
        }
        true
    }

    /// Handle a jump edge: wall jump when airborne against a wall, otherwise
    /// a budget jump. Ignored while dashing.
    pub fn try_jump(&mut self, config: &MotionConfig, velocity: &mut Vec2) -> Option<JumpKind> {
        if self.dashing {
            return None;
        }

        if self.touching_wall && !self.grounded {
            self.wall_jump(config, velocity);
            return Some(JumpKind::Wall);
        }

        self.consume_jump(config, velocity).then_some(JumpKind::Budget)
    }

    // ------------------------------------------------------------------
    // Wall interaction
    // ------------------------------------------------------------------

    pub fn wall_phase(&self) -> WallPhase {
        if self.wall_jump_lock > 0.0 {
            WallPhase::JumpLocked
        } else if self.wall_sliding {
            WallPhase::Sliding
        } else {
            WallPhase::NotTouching
        }
    }

    /// Re-derive wall-slide eligibility from contact and falling speed.
    pub fn evaluate_wall_slide(&mut self, vertical_velocity: f32) {
        self.wall_sliding = self.touching_wall
            && !self.grounded
            && vertical_velocity < 0.0
            && self.wall_jump_lock <= 0.0
            && !self.dashing;
    }

    /// Push off the wall, lock input, refresh dash and leave one air jump.
    pub fn wall_jump(&mut self, config: &MotionConfig, velocity: &mut Vec2) {
        *velocity = Vec2::new(
            -self.wall_direction * config.wall_jump_force_x,
            config.wall_jump_force_y,
        );
        self.wall_jump_lock = config.wall_jump_lock_time;
        self.wall_sliding = false;
        self.dash_allowed = true;
        self.jumps_remaining = config.max_jumps - 1;
        self.cap_jumps_for_wall(config);
    }

    pub fn is_wall_jump_locked(&self) -> bool {
        self.wall_jump_lock > 0.0
    }

    // ------------------------------------------------------------------
    // Dash
    // ------------------------------------------------------------------

    /// Count the dash cooldown down; dash returns only on the ground.
    pub fn tick_dash_cooldown(&mut self, dt: f32) {
        if self.dash_allowed {
            return;
        }

        self.dash_cooldown = (self.dash_cooldown - dt).max(0.0);
        if self.dash_cooldown <= 0.0 && self.grounded {
            self.dash_allowed = true;
        }
    }

    /// Start a dash if one is available. Returns false without touching
    /// anything otherwise.
    pub fn try_start_dash(
        &mut self,
        config: &MotionConfig,
        velocity: &mut Vec2,
        gravity_scale: &mut f32,
    ) -> bool {
        if !self.dash_allowed || self.dashing {
            return false;
        }

        let direction = if self.horizontal != 0.0 {
            self.horizontal.signum()
        } else {
            self.last_direction
        };

        self.dashing = true;
        self.dash_allowed = false;
        self.dash_cooldown = config.dash_cooldown;
        self.dash_timer = Some(Timer::from_seconds(config.dash_duration, TimerMode::Once));
        self.wall_jump_lock = 0.0;
        self.wall_sliding = false;

        *gravity_scale = config.dash_gravity_scale;
        *velocity = Vec2::new(direction * config.dash_force, 0.0);
        true
    }

    /// Advance the pending dash end. Returns true on the step the dash ends.
    pub fn finish_dash(
        &mut self,
        config: &MotionConfig,
        delta: Duration,
        gravity_scale: &mut f32,
    ) -> bool {
        let Some(timer) = self.dash_timer.as_mut() else {
            return false;
        };

        timer.tick(delta);
        if !timer.remaining().is_zero() {
            return false;
        }

        self.dash_timer = None;
        self.dashing = false;
        *gravity_scale = config.resting_gravity_scale;
        true
    }

    /// Drop any pending dash end without restoring gravity.
    pub fn cancel_dash(&mut self) {
        self.dash_timer = None;
        self.dashing = false;
    }

    // ------------------------------------------------------------------
    // Velocity resolution (fixed step)
    // ------------------------------------------------------------------

    pub fn motion_phase(&self) -> MotionPhase {
        if self.dashing {
            MotionPhase::Dashing
        } else if self.is_wall_jump_locked() {
            MotionPhase::WallJumpLocked
        } else if self.wall_sliding {
            MotionPhase::WallSliding
        } else {
            MotionPhase::Free
        }
    }

    /// Write this fixed step's velocity. Vertical speed in the free phase is
    /// left to the physics integrator.
    pub fn resolve_velocity(
        &mut self,
        config: &MotionConfig,
        dt: f32,
        velocity: &mut Vec2,
    ) -> MotionPhase {
        let phase = self.motion_phase();
        match phase {
            MotionPhase::Dashing => {}
            MotionPhase::WallJumpLocked => {
                self.wall_jump_lock = (self.wall_jump_lock - dt).max(0.0);
            }
            MotionPhase::WallSliding => {
                let max_horizontal = config.wall_slide_max_horizontal;
                velocity.x = velocity.x.clamp(-max_horizontal, max_horizontal);
                velocity.y = -config.wall_slide_speed;
            }
            MotionPhase::Free => {
                velocity.x = self.horizontal * config.move_speed;
            }
        }
        phase
    }

    // ------------------------------------------------------------------
    // Respawn
    // ------------------------------------------------------------------

    /// Put the character back at its spawn point with a fresh state.
    pub fn respawn(
        &mut self,
        config: &MotionConfig,
        translation: &mut Vec3,
        velocity: &mut Vec2,
        gravity_scale: &mut f32,
    ) {
        translation.x = self.spawn_position.x;
        translation.y = self.spawn_position.y;
        *velocity = Vec2::ZERO;
        *gravity_scale = config.resting_gravity_scale;

        self.cancel_dash();
        self.jumps_remaining = config.max_jumps;
        self.wall_jump_lock = 0.0;
        self.wall_sliding = false;

        // Contacts were read at the old position
        self.touching_wall = false;
        self.grounded = false;
        self.grounded_last_tick = false;
    }

    // ------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------

    /// Animation for the current state, ignoring deduplication.
    pub fn resolved_animation(&self) -> AnimationState {
        if self.wall_sliding {
            AnimationState::Sliding
        } else if !self.grounded {
            AnimationState::Airborne
        } else if self.horizontal != 0.0 {
            AnimationState::Moving
        } else {
            AnimationState::Idle
        }
    }

    /// Returns the animation to fire, or None when it did not change or a
    /// dash is running.
    pub fn select_animation(&mut self) -> Option<AnimationState> {
        if self.dashing {
            return None;
        }

        let next = self.resolved_animation();
        if self.animation == Some(next) {
            return None;
        }
        self.animation = Some(next);
        Some(next)
    }

    /// Forget the last animation signal so the next selection fires again.
    pub fn reset_animation(&mut self) {
        self.animation = None;
    }

    /// Sprite orientation. A wall-sliding character faces away from the wall.
    pub fn sprite_flipped(&self) -> bool {
        if self.wall_sliding {
            self.wall_direction > 0.0
        } else {
            !self.facing_right
        }
    }
}
