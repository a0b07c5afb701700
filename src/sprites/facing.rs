//! Sprite orientation for characters.

use bevy::prelude::*;

use crate::movement::MotionState;

/// Flip character sprites to match their facing.
pub fn sync_sprite_facing(mut query: Query<(&MotionState, &mut Sprite), Changed<MotionState>>) {
    for (state, mut sprite) in &mut query {
        let flipped = state.sprite_flipped();
        if sprite.flip_x != flipped {
            sprite.flip_x = flipped;
        }
    }
}
