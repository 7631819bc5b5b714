use bevy::input::gamepad::{GamepadAxis, GamepadButton};
use bevy::prelude::*;

/// Device controls mapped onto the logical gimbal and throttle actions.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub gimbal_up: Vec<KeyCode>,
    pub gimbal_down: Vec<KeyCode>,
    pub gimbal_left: Vec<KeyCode>,
    pub gimbal_right: Vec<KeyCode>,
    pub gimbal_stick_x: GamepadAxis,
    pub gimbal_stick_y: GamepadAxis,
    pub throttle_increase_keys: Vec<KeyCode>,
    pub throttle_decrease_keys: Vec<KeyCode>,
    pub throttle_increase_trigger: GamepadButton,
    pub throttle_decrease_trigger: GamepadButton,
    pub pointer_button: MouseButton,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            gimbal_up: vec![KeyCode::ArrowUp, KeyCode::KeyW],
            gimbal_down: vec![KeyCode::ArrowDown, KeyCode::KeyS],
            gimbal_left: vec![KeyCode::ArrowLeft, KeyCode::KeyA],
            gimbal_right: vec![KeyCode::ArrowRight, KeyCode::KeyD],
            gimbal_stick_x: GamepadAxis::LeftStickX,
            gimbal_stick_y: GamepadAxis::LeftStickY,
            throttle_increase_keys: vec![KeyCode::ShiftLeft],
            throttle_decrease_keys: vec![KeyCode::ControlLeft],
            throttle_increase_trigger: GamepadButton::RightTrigger2,
            throttle_decrease_trigger: GamepadButton::LeftTrigger2,
            pointer_button: MouseButton::Left,
        }
    }
}
