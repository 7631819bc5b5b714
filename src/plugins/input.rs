use bevy::prelude::*;

use super::events::{GimbalCommandEvent, InputSessionEnded, ThrottleCommandEvent};
use crate::resources::{
    GimbalActions, GimbalInputController, InputBindings, InputConfig, InputTick, ThrottleActions,
    ThrottleInputController,
};
use crate::systems::{
    advance_input_tick, gimbal_input_system, read_input_devices, reset_input_on_session_end,
    throttle_input_system,
};
use crate::utils::constants::DEFAULT_TIMESTEP;

/// Input stages, run in this order every fixed tick ahead of guidance.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum InputSet {
    Session,
    ReadDevices,
    Gimbal,
    Throttle,
}

pub struct InputControlPlugin {
    pub config: InputConfig,
    pub timestep: f64,
    /// Sample keyboard, gamepad and mouse. Disable to feed
    /// [`GimbalActions`] / [`ThrottleActions`] directly.
    pub read_devices: bool,
}

impl Default for InputControlPlugin {
    fn default() -> Self {
        Self {
            config: InputConfig::default(),
            timestep: DEFAULT_TIMESTEP,
            read_devices: true,
        }
    }
}

impl InputControlPlugin {
    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    /// No device sampling; actions are written by the host.
    pub fn headless(mut self) -> Self {
        self.read_devices = false;
        self
    }
}

impl Plugin for InputControlPlugin {
    fn build(&self, app: &mut App) {
        info!(
            "Input control at {:.1} Hz, throttle arbitration {:?}",
            1.0 / self.timestep,
            self.config.throttle.arbitration
        );

        app.insert_resource(Time::<Fixed>::from_seconds(self.timestep))
            .insert_resource(InputTick::new(self.timestep))
            .insert_resource(self.config.clone())
            .insert_resource(GimbalInputController::new(self.config.gimbal.clone()))
            .insert_resource(ThrottleInputController::new(self.config.throttle.clone()))
            .init_resource::<GimbalActions>()
            .init_resource::<ThrottleActions>()
            .init_resource::<InputBindings>();

        app.add_event::<GimbalCommandEvent>()
            .add_event::<ThrottleCommandEvent>()
            .add_event::<InputSessionEnded>();

        app.configure_sets(
            FixedUpdate,
            (
                InputSet::Session,
                InputSet::ReadDevices,
                InputSet::Gimbal,
                InputSet::Throttle,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                reset_input_on_session_end.in_set(InputSet::Session),
                gimbal_input_system.in_set(InputSet::Gimbal),
                (throttle_input_system, advance_input_tick)
                    .chain()
                    .in_set(InputSet::Throttle),
            ),
        );

        if self.read_devices {
            app.add_systems(FixedUpdate, read_input_devices.in_set(InputSet::ReadDevices));
        }
    }
}
