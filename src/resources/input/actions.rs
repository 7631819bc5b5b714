use bevy::prelude::*;
use nalgebra::Vector2;

use super::types::{GimbalReadings, PointerEvent, ThrottleReadings};
use crate::utils::constants::DEFAULT_TIMESTEP;

/// Logical gimbal actions for the coming tick.
///
/// Filled by the device reader (or directly by a host or test), drained by
/// the gimbal system.
#[derive(Resource, Debug, Default, Clone)]
pub struct GimbalActions {
    pub readings: GimbalReadings,
    pub pointer_events: Vec<PointerEvent>,
    pointer_held: bool,
    last_cursor: Option<Vector2<f64>>,
}

impl GimbalActions {
    pub fn push_pointer(&mut self, event: PointerEvent) {
        self.pointer_events.push(event);
    }

    /// Turn a sampled button level and cursor position into press, move and
    /// release edges.
    pub fn track_pointer(&mut self, held: bool, cursor: Option<Vector2<f64>>) {
        match (self.pointer_held, held) {
            (false, true) => {
                // A press without a cursor (e.g. pointer outside the window) never starts a drag.
                if let Some(position) = cursor {
                    self.pointer_events.push(PointerEvent::Pressed(position));
                    self.pointer_held = true;
                    self.last_cursor = cursor;
                }
            }
            (true, true) => {
                if let Some(position) = cursor {
                    if self.last_cursor != cursor {
                        self.pointer_events.push(PointerEvent::Moved(position));
                        self.last_cursor = cursor;
                    }
                }
            }
            (true, false) => {
                self.pointer_events.push(PointerEvent::Released);
                self.pointer_held = false;
                self.last_cursor = None;
            }
            (false, false) => {}
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Logical throttle actions for the coming tick.
#[derive(Resource, Debug, Default, Clone)]
pub struct ThrottleActions {
    pub readings: ThrottleReadings,
}

/// Fixed tick length shared by the input systems.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct InputTick {
    /// Tick length [s]
    pub dt: f64,
    /// Ticks run since the session started
    pub count: u64,
}

impl Default for InputTick {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTEP)
    }
}

impl InputTick {
    pub fn new(dt: f64) -> Self {
        Self { dt, count: 0 }
    }
}
