//! Input module - capture_input system filling the buffered SwingInput

use bevy::prelude::*;

use crate::camera::FlyCamera;
use crate::shooting::SwingInput;

/// Runs in Update to capture swing state before it's cleared.
///
/// Edges accumulate until the fixed-step session consumes them, so a tap
/// shorter than one fixed step is never lost. Aim follows the camera.
pub fn capture_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    camera: Query<&FlyCamera>,
    mut input: ResMut<SwingInput>,
) {
    let held_now = keyboard.pressed(KeyCode::Space)
        || gamepads.iter().any(|gp| gp.pressed(GamepadButton::South));

    let just_pressed = keyboard.just_pressed(KeyCode::Space)
        || gamepads
            .iter()
            .any(|gp| gp.just_pressed(GamepadButton::South));
    if just_pressed {
        input.pressed = true;
    }

    if input.held && !held_now {
        input.released = true;
    }
    input.held = held_now;

    if let Ok(fly) = camera.single() {
        input.aim = fly.forward();
    }
}
