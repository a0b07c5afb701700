//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MotionInput;

const PROBE_KEYS: [KeyCode; 3] = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MotionInput>) {
    // Raw axis (-1, 0 or 1); opposing keys cancel
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.horizontal = x;
    input.jump_pressed = keyboard.just_pressed(KeyCode::Space);
    input.dash_pressed = keyboard.just_pressed(KeyCode::ShiftLeft);
    input.respawn_pressed = keyboard.just_pressed(KeyCode::KeyR);
    for (toggle, key) in input.probe_toggles.iter_mut().zip(PROBE_KEYS) {
        *toggle = keyboard.just_pressed(key);
    }
}
