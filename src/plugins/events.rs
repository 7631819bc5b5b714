use bevy::prelude::*;

use crate::resources::{
    GimbalCommand, GimbalTick, InputSource, ScenarioInitialState, ThrottleCommand,
};

/// Published on every tick where gimbal input was handled or a return to
/// center is running. A continuous stream, not a change notification.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GimbalCommandEvent {
    pub command: GimbalCommand,
    pub handled: bool,
    pub animating: bool,
    pub source: InputSource,
}

impl From<GimbalTick> for GimbalCommandEvent {
    fn from(tick: GimbalTick) -> Self {
        Self {
            command: tick.command,
            handled: tick.handled,
            animating: tick.animating,
            source: tick.source,
        }
    }
}

/// Published when the throttle moves by more than the notification epsilon.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ThrottleCommandEvent {
    pub command: ThrottleCommand,
}

/// Published once when the scenario has been resolved at startup.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ScenarioResolvedEvent {
    pub initial_state: ScenarioInitialState,
}

/// Sent by the host when a session ends; the input controllers reset.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct InputSessionEnded;
