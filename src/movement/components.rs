//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Where the contact sensors sit relative to the character's origin.
#[derive(Component, Debug, Clone, Copy)]
pub struct SensorRig {
    /// Center of the ground overlap circle (the feet).
    pub ground_offset: Vec2,
    /// Origin of the two horizontal wall probes.
    pub wall_offset: Vec2,
}

impl SensorRig {
    /// Rig for a box collider of the given size.
    pub fn for_body(size: Vec2) -> Self {
        Self {
            ground_offset: Vec2::new(0.0, -size.y * 0.5),
            wall_offset: Vec2::ZERO,
        }
    }
}
