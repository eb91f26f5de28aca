//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{InputSnapshot, MovementInput};

const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::ArrowUp, KeyCode::KeyW];
const LEFT_KEYS: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyA];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyD];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let left = keyboard.any_pressed(LEFT_KEYS);
    let right = keyboard.any_pressed(RIGHT_KEYS);

    // Raw axis: only -1, 0 or 1
    let mut move_axis = 0.0;
    if left {
        move_axis -= 1.0;
    }
    if right {
        move_axis += 1.0;
    }

    // All jump keys act as one button: it goes down when the first key is
    // pressed and up when the last key is released.
    let jump_held = keyboard.any_pressed(JUMP_KEYS);
    let jump_down = keyboard.any_just_pressed(JUMP_KEYS)
        && JUMP_KEYS
            .iter()
            .all(|key| !keyboard.pressed(*key) || keyboard.just_pressed(*key));
    let jump_up = keyboard.any_just_released(JUMP_KEYS) && !jump_held;

    input.0 = InputSnapshot {
        jump_down,
        jump_up,
        jump_held,
        move_axis,
        left_pressed: keyboard.any_just_pressed(LEFT_KEYS),
        right_pressed: keyboard.any_just_pressed(RIGHT_KEYS),
    };
}
