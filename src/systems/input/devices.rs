use bevy::input::gamepad::{Gamepad, GamepadInput};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use nalgebra::Vector2;

use crate::resources::{GimbalActions, GimbalReadings, InputBindings, ThrottleActions, ThrottleReadings};

/// System sampling keyboard, gamepad and mouse into the logical action
/// resources.
///
/// Every device is optional so the same schedule runs headless. Only the
/// first connected gamepad is read.
pub fn read_input_devices(
    bindings: Res<InputBindings>,
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    gamepads: Query<&Gamepad>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gimbal: ResMut<GimbalActions>,
    mut throttle: ResMut<ThrottleActions>,
) {
    let pressed = |keys: &[KeyCode]| {
        keyboard
            .as_ref()
            .is_some_and(|kb| kb.any_pressed(keys.iter().copied()))
    };
    let gamepad = gamepads.iter().next();

    gimbal.readings = GimbalReadings {
        axis: Vector2::new(
            analog(gamepad, bindings.gimbal_stick_x),
            analog(gamepad, bindings.gimbal_stick_y),
        ),
        up: pressed(&bindings.gimbal_up),
        down: pressed(&bindings.gimbal_down),
        left: pressed(&bindings.gimbal_left),
        right: pressed(&bindings.gimbal_right),
    };

    throttle.readings = ThrottleReadings {
        increase_axis: analog(gamepad, bindings.throttle_increase_trigger),
        decrease_axis: analog(gamepad, bindings.throttle_decrease_trigger),
        increase_key: pressed(&bindings.throttle_increase_keys),
        decrease_key: pressed(&bindings.throttle_decrease_keys),
    };

    let held = mouse
        .as_ref()
        .is_some_and(|m| m.pressed(bindings.pointer_button));
    let cursor = windows
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position())
        .map(|p| Vector2::new(p.x as f64, p.y as f64));
    gimbal.track_pointer(held, cursor);
}

fn analog(gamepad: Option<&Gamepad>, input: impl Into<GamepadInput>) -> f64 {
    let input = input.into();
    gamepad
        .and_then(|g| g.get(input))
        .map_or(0.0, f64::from)
}
