use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resources::input::Easing;
use crate::utils::errors::ConfigError;

/// Gimbal (steering) channel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GimbalConfig {
    /// Stick magnitude below which the joystick is idle
    pub joystick_deadzone: f64,
    /// Pointer offsets within this many pixels of center commit (0, 0)
    pub mouse_deadzone: f64,
    /// Pointer offset [px] that maps to full deflection
    pub mouse_radius: f64,
    /// Screen position [px] of the control's center
    pub pointer_center: Vector2<f64>,
    /// Per-tick exponential smoothing factor for the display value, in (0, 1]
    pub smoothing: f64,
    /// Return-to-center duration [s]
    pub return_duration: f64,
    pub return_easing: Easing,
    pub joystick_enabled: bool,
    pub keyboard_enabled: bool,
    pub mouse_enabled: bool,
}

impl Default for GimbalConfig {
    fn default() -> Self {
        Self {
            joystick_deadzone: 0.15,
            mouse_deadzone: 2.0,
            mouse_radius: 64.0,
            pointer_center: Vector2::new(96.0, 96.0),
            smoothing: 0.25,
            return_duration: 0.3,
            return_easing: Easing::QuadOut,
            joystick_enabled: true,
            keyboard_enabled: true,
            mouse_enabled: true,
        }
    }
}

impl GimbalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit_interval("gimbal.joystick_deadzone", self.joystick_deadzone)?;
        check_non_negative("gimbal.mouse_deadzone", self.mouse_deadzone)?;
        if !(self.mouse_radius.is_finite() && self.mouse_radius > 0.0) {
            return Err(ConfigError::invalid("gimbal.mouse_radius", self.mouse_radius));
        }
        if self.mouse_deadzone >= self.mouse_radius {
            return Err(ConfigError::InvalidRange {
                name: "gimbal.mouse_deadzone..mouse_radius".into(),
                min: self.mouse_deadzone,
                max: self.mouse_radius,
            });
        }
        if !self.pointer_center.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::invalid(
                "gimbal.pointer_center",
                format!("{:?}", self.pointer_center),
            ));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::invalid("gimbal.smoothing", self.smoothing));
        }
        check_non_negative("gimbal.return_duration", self.return_duration)
    }
}

/// How joystick and keyboard share the throttle channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrottleArbitration {
    /// Joystick sets the value directly and locks out the keyboard until a
    /// cooldown expires, then releases to zero.
    #[default]
    PriorityCooldown,
    /// Both sources add rate-limited deltas every tick.
    AdditiveBlend,
}

/// Throttle channel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Change per second while a key (or blended trigger) is held
    pub increment_rate: f64,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub joystick_deadzone: f64,
    /// Keyboard lock-out after the last joystick input [s]
    pub cooldown: f64,
    pub joystick_enabled: bool,
    pub keyboard_enabled: bool,
    pub arbitration: ThrottleArbitration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            increment_rate: 0.5,
            min: 0.0,
            max: 1.0,
            default: 0.0,
            joystick_deadzone: 0.05,
            cooldown: 0.5,
            joystick_enabled: true,
            keyboard_enabled: true,
            arbitration: ThrottleArbitration::PriorityCooldown,
        }
    }
}

impl ThrottleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("throttle.increment_rate", self.increment_rate)?;
        if !(self.min.is_finite() && self.max.is_finite()) || self.min > self.max {
            return Err(ConfigError::InvalidRange {
                name: "throttle".into(),
                min: self.min,
                max: self.max,
            });
        }
        if !(self.default >= self.min && self.default <= self.max) {
            return Err(ConfigError::invalid("throttle.default", self.default));
        }
        check_unit_interval("throttle.joystick_deadzone", self.joystick_deadzone)?;
        check_non_negative("throttle.cooldown", self.cooldown)
    }
}

/// Complete input configuration, loaded once before the controllers are built.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub gimbal: GimbalConfig,
    pub throttle: ThrottleConfig,
}

impl InputConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: InputConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: InputConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json` file, or YAML for any other extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading input config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_yaml_str(&contents),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gimbal.validate()?;
        self.throttle.validate()
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(name, value))
    }
}

fn check_unit_interval(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(name, value))
    }
}
