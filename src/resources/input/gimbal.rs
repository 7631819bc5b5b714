use bevy::prelude::*;
use nalgebra::Vector2;

use super::animation::ReturnAnimation;
use super::types::{GimbalCommand, GimbalReadings, GimbalState, GimbalTick, InputSource};
use crate::resources::config::GimbalConfig;
use crate::utils::constants::GIMBAL_CENTER_EPSILON;
use crate::utils::math::{clamp_to_radius, clamp_to_unit_circle};

/// Arbitrates joystick, keyboard and pointer drag into one steering command.
///
/// Two values are tracked. The authoritative `gimbal` is what guidance
/// consumes; `display` trails it through exponential smoothing and exists
/// only for presentation.
#[derive(Resource, Debug, Clone)]
pub struct GimbalInputController {
    config: GimbalConfig,
    gimbal: Vector2<f64>,
    display: Vector2<f64>,
    joystick_active: bool,
    keyboard_active: bool,
    dragging: bool,
    source: InputSource,
    returning: Option<ReturnAnimation>,
    enabled: bool,
}

impl Default for GimbalInputController {
    fn default() -> Self {
        Self::new(GimbalConfig::default())
    }
}

impl GimbalInputController {
    pub fn new(config: GimbalConfig) -> Self {
        Self {
            config,
            gimbal: Vector2::zeros(),
            display: Vector2::zeros(),
            joystick_active: false,
            keyboard_active: false,
            dragging: false,
            source: InputSource::None,
            returning: None,
            enabled: true,
        }
    }

    /// Advance one tick with the polled joystick and keyboard readings.
    ///
    /// Pointer activity arrives separately through the `pointer_*` methods;
    /// an ongoing drag still counts as handled input for the tick.
    pub fn tick(&mut self, readings: &GimbalReadings, dt: f64) -> GimbalTick {
        if !self.enabled {
            return GimbalTick {
                command: self.get_gimbal(),
                ..Default::default()
            };
        }

        let mut handled = false;

        let stick = readings.axis;
        if self.config.joystick_enabled && stick.norm() > self.config.joystick_deadzone {
            self.commit(clamp_to_unit_circle(&stick), InputSource::Joystick);
            self.joystick_active = true;
            self.keyboard_active = false;
            handled = true;
        } else if self.joystick_active {
            self.joystick_active = false;
            if !self.dragging && !self.keyboard_active {
                self.begin_return();
            }
        }

        if !handled {
            // A keyboard disabled mid-hold reads as released.
            let keys = if self.config.keyboard_enabled {
                readings.digital_axis()
            } else {
                Vector2::zeros()
            };
            if keys != Vector2::zeros() {
                self.commit(clamp_to_unit_circle(&keys), InputSource::Keyboard);
                self.keyboard_active = true;
                handled = true;
            } else if self.keyboard_active {
                self.keyboard_active = false;
                if !self.dragging && !self.joystick_active {
                    self.begin_return();
                }
            }
        }

        if self.dragging {
            handled = true;
        }

        let animating = match self.returning.as_mut() {
            Some(animation) => {
                let (value, display) = animation.advance(dt);
                self.gimbal = value;
                self.display = display;
                if animation.is_finished() {
                    debug!("Gimbal returned to center");
                    self.returning = None;
                    self.source = InputSource::None;
                }
                true
            }
            None => {
                self.display += (self.gimbal - self.display) * self.config.smoothing;
                false
            }
        };

        GimbalTick {
            command: self.get_gimbal(),
            handled,
            animating,
            source: self.source,
        }
    }

    /// Start a drag if `position` [px] lies on the control.
    pub fn pointer_pressed(&mut self, position: Vector2<f64>) -> Option<GimbalCommand> {
        if !self.enabled || !self.config.mouse_enabled {
            return None;
        }

        let offset = position - self.config.pointer_center;
        if offset.norm() > self.config.mouse_radius {
            debug!("Pointer press at {:?} is outside the gimbal control", position);
            return None;
        }

        self.dragging = true;
        Some(self.apply_drag(offset))
    }

    /// Update an ongoing drag. Ignored when no drag is active.
    pub fn pointer_moved(&mut self, position: Vector2<f64>) -> Option<GimbalCommand> {
        if !self.enabled || !self.dragging {
            return None;
        }
        let offset = position - self.config.pointer_center;
        Some(self.apply_drag(offset))
    }

    /// End a drag and head back to center unless another source took over.
    pub fn pointer_released(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        if !self.joystick_active && !self.keyboard_active {
            self.begin_return();
        }
    }

    /// The authoritative command, guaranteed inside the unit circle.
    pub fn get_gimbal(&self) -> GimbalCommand {
        GimbalCommand::from_vector(&clamp_to_unit_circle(&self.gimbal))
    }

    /// Smoothed value for presentation only.
    pub fn get_display(&self) -> GimbalCommand {
        GimbalCommand::from_vector(&clamp_to_unit_circle(&self.display))
    }

    pub fn state(&self) -> GimbalState {
        if self.returning.is_some() {
            GimbalState::Returning
        } else if self.dragging {
            GimbalState::MouseDragging
        } else if self.joystick_active {
            GimbalState::JoystickActive
        } else if self.keyboard_active {
            GimbalState::KeyboardActive
        } else {
            GimbalState::Idle
        }
    }

    pub fn active_source(&self) -> InputSource {
        self.source
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling snaps to center without animation and clears every source.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.reset();
        }
        self.enabled = enabled;
    }

    /// Immediate, non-animated return to center with all sources cleared.
    pub fn reset(&mut self) {
        self.gimbal = Vector2::zeros();
        self.display = Vector2::zeros();
        self.joystick_active = false;
        self.keyboard_active = false;
        self.dragging = false;
        self.source = InputSource::None;
        self.returning = None;
    }

    /// Swap in a new configuration. Only valid between ticks.
    pub fn reconfigure(&mut self, config: GimbalConfig) {
        if !config.mouse_enabled && self.dragging {
            self.pointer_released();
        }
        self.config = config;
    }

    pub fn config(&self) -> &GimbalConfig {
        &self.config
    }

    fn commit(&mut self, value: Vector2<f64>, source: InputSource) {
        self.gimbal = value;
        self.source = source;
        self.returning = None;
    }

    fn apply_drag(&mut self, offset: Vector2<f64>) -> GimbalCommand {
        let radius = self.config.mouse_radius;
        let clamped = clamp_to_radius(&offset, radius);
        let value = if clamped.norm() <= self.config.mouse_deadzone || radius <= 0.0 {
            Vector2::zeros()
        } else {
            // Screen y grows downwards; dragging up steers up.
            Vector2::new(clamped.x / radius, -clamped.y / radius)
        };
        self.commit(clamp_to_unit_circle(&value), InputSource::Mouse);
        self.get_gimbal()
    }

    fn begin_return(&mut self) {
        if self.gimbal.norm() < GIMBAL_CENTER_EPSILON {
            self.gimbal = Vector2::zeros();
            self.display = Vector2::zeros();
            self.returning = None;
            self.source = InputSource::None;
            return;
        }

        debug!(
            "Gimbal returning to center from ({:.3}, {:.3})",
            self.gimbal.x, self.gimbal.y
        );
        self.returning = Some(ReturnAnimation::to_center(
            self.gimbal,
            self.display,
            self.config.return_duration,
            self.config.return_easing,
        ));
    }
}
