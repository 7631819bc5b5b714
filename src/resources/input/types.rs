use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Which device currently drives a channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSource {
    #[default]
    None,
    Joystick,
    Keyboard,
    Mouse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GimbalState {
    #[default]
    Idle,
    JoystickActive,
    KeyboardActive,
    MouseDragging,
    Returning,
}

/// Normalized steering deflection, `‖(x, y)‖ <= 1`, +y is up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GimbalCommand {
    pub x: f64,
    pub y: f64,
}

impl GimbalCommand {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_vector(v: &Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }

    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Outcome of one gimbal tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GimbalTick {
    pub command: GimbalCommand,
    /// A source committed a value this tick (stick, keys, or an ongoing drag)
    pub handled: bool,
    /// Return-to-center was in progress this tick
    pub animating: bool,
    pub source: InputSource,
}

impl GimbalTick {
    /// Consumers receive a command on every tick where this is true, not
    /// only on changes.
    pub fn should_notify(&self) -> bool {
        self.handled || self.animating
    }
}

/// Throttle setting within the configured `[min, max]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThrottleCommand {
    pub value: f64,
}

/// Logical gimbal actions sampled for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GimbalReadings {
    /// Analog stick, +x right and +y up
    pub axis: Vector2<f64>,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl GimbalReadings {
    pub fn from_axis(x: f64, y: f64) -> Self {
        Self {
            axis: Vector2::new(x, y),
            ..Default::default()
        }
    }

    /// Compose the four digital directions into an axis pair.
    pub fn digital_axis(&self) -> Vector2<f64> {
        let axis = |positive: bool, negative: bool| match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };
        Vector2::new(axis(self.right, self.left), axis(self.up, self.down))
    }
}

/// Pointer activity on the gimbal control, in screen pixels (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Vector2<f64>),
    Moved(Vector2<f64>),
    Released,
}

/// Logical throttle actions sampled for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThrottleReadings {
    /// Analog trigger in [0, 1]
    pub increase_axis: f64,
    /// Second analog trigger in [0, 1]
    pub decrease_axis: f64,
    pub increase_key: bool,
    pub decrease_key: bool,
}

impl ThrottleReadings {
    pub fn trigger(value: f64) -> Self {
        Self {
            increase_axis: value,
            ..Default::default()
        }
    }

    pub fn keys(increase: bool, decrease: bool) -> Self {
        Self {
            increase_key: increase,
            decrease_key: decrease,
            ..Default::default()
        }
    }

    pub(crate) fn key_axis(&self) -> f64 {
        match (self.increase_key, self.decrease_key) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}
