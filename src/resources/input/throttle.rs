use bevy::prelude::*;

use super::types::{InputSource, ThrottleCommand, ThrottleReadings};
use crate::resources::config::{ThrottleArbitration, ThrottleConfig};
use crate::utils::constants::{THROTTLE_NOTIFY_EPSILON, TIME_EPSILON};

/// Scalar throttle shared between a trigger axis and two keys.
#[derive(Resource, Debug, Clone)]
pub struct ThrottleInputController {
    config: ThrottleConfig,
    throttle: f64,
    /// Seconds of keyboard lock-out left after the last joystick input
    cooldown_remaining: f64,
    /// Joystick set the value and the release to zero is still pending
    joystick_latched: bool,
    last_notified: f64,
    source: InputSource,
}

impl Default for ThrottleInputController {
    fn default() -> Self {
        Self::new(ThrottleConfig::default())
    }
}

impl ThrottleInputController {
    pub fn new(config: ThrottleConfig) -> Self {
        let throttle = config.default;
        Self {
            config,
            throttle,
            cooldown_remaining: 0.0,
            joystick_latched: false,
            last_notified: throttle,
            source: InputSource::None,
        }
    }

    /// Advance one tick. Returns a command only when the value moved by more
    /// than the notification epsilon since the last one.
    pub fn tick(&mut self, readings: &ThrottleReadings, dt: f64) -> Option<ThrottleCommand> {
        match self.config.arbitration {
            ThrottleArbitration::PriorityCooldown => self.tick_priority(readings, dt),
            ThrottleArbitration::AdditiveBlend => self.tick_additive(readings, dt),
        }
        self.throttle = self.clamp(self.throttle);
        self.notify_if_changed()
    }

    /// Set the throttle directly, clamped to `[min, max]`.
    pub fn set_throttle(&mut self, value: f64) -> Option<ThrottleCommand> {
        self.throttle = self.clamp(value);
        self.notify_if_changed()
    }

    pub fn get_throttle(&self) -> f64 {
        self.throttle
    }

    pub fn command(&self) -> ThrottleCommand {
        ThrottleCommand {
            value: self.throttle,
        }
    }

    pub fn active_source(&self) -> InputSource {
        self.source
    }

    /// True while the keyboard is locked out by recent joystick input.
    pub fn cooldown_active(&self) -> bool {
        self.joystick_latched
    }

    /// Back to the configured default with no cooldown pending.
    pub fn reset(&mut self) {
        self.throttle = self.config.default;
        self.last_notified = self.throttle;
        self.cooldown_remaining = 0.0;
        self.joystick_latched = false;
        self.source = InputSource::None;
    }

    /// Swap in a new configuration. Only valid between ticks.
    pub fn reconfigure(&mut self, config: ThrottleConfig) {
        self.config = config;
        self.throttle = self.clamp(self.throttle);
        if self.config.arbitration == ThrottleArbitration::AdditiveBlend {
            self.cooldown_remaining = 0.0;
            self.joystick_latched = false;
        }
    }

    pub fn config(&self) -> &ThrottleConfig {
        &self.config
    }

    fn tick_priority(&mut self, readings: &ThrottleReadings, dt: f64) {
        if let Some(level) = self.joystick_level(readings) {
            self.throttle = level;
            self.cooldown_remaining = self.config.cooldown;
            self.joystick_latched = true;
            self.source = InputSource::Joystick;
            return;
        }

        // A zero cooldown still releases, on the first quiet tick.
        if self.joystick_latched {
            self.cooldown_remaining -= dt;
            if self.cooldown_remaining <= TIME_EPSILON {
                debug!("Throttle joystick cooldown expired, releasing to zero");
                self.cooldown_remaining = 0.0;
                self.joystick_latched = false;
                self.throttle = 0.0;
                self.source = InputSource::None;
            }
            return;
        }

        if self.config.keyboard_enabled {
            let keys = readings.key_axis();
            if keys != 0.0 {
                self.throttle += keys * self.config.increment_rate * dt;
                self.source = InputSource::Keyboard;
            } else if self.source == InputSource::Keyboard {
                self.source = InputSource::None;
            }
        }
    }

    fn tick_additive(&mut self, readings: &ThrottleReadings, dt: f64) {
        let mut delta = 0.0;
        let mut source = InputSource::None;

        if let Some(level) = self.joystick_level(readings) {
            delta += level;
            source = InputSource::Joystick;
        }
        if self.config.keyboard_enabled {
            let keys = readings.key_axis();
            if keys != 0.0 {
                delta += keys;
                if source == InputSource::None {
                    source = InputSource::Keyboard;
                }
            }
        }

        self.throttle += delta * self.config.increment_rate * dt;
        self.source = source;
    }

    /// `increase - decrease` when either trigger is past the deadzone.
    fn joystick_level(&self, readings: &ThrottleReadings) -> Option<f64> {
        if !self.config.joystick_enabled {
            return None;
        }
        let deadzone = self.config.joystick_deadzone;
        if readings.increase_axis > deadzone || readings.decrease_axis > deadzone {
            Some(readings.increase_axis - readings.decrease_axis)
        } else {
            None
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.config.min;
        }
        value.clamp(self.config.min, self.config.max)
    }

    fn notify_if_changed(&mut self) -> Option<ThrottleCommand> {
        if (self.throttle - self.last_notified).abs() > THROTTLE_NOTIFY_EPSILON {
            self.last_notified = self.throttle;
            Some(self.command())
        } else {
            None
        }
    }
}
