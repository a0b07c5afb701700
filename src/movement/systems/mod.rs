//! Movement domain: system modules for locomotion updates.

pub(crate) mod animation;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod physics;

pub(crate) use animation::{reset_animation_on_respawn, select_animation_state};
pub(crate) use collisions::{detect_ground, detect_walls};
pub(crate) use input::read_input;
pub(crate) use movement::{handle_actions, update_timers, update_wall_interaction};
pub(crate) use physics::{finish_dash, resolve_velocities};
