use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resources::environment::EnvironmentConfig;
use crate::utils::constants::{KMH_TO_MPS, KNOTS_TO_MPS};
use crate::utils::errors::ScenarioError;
use crate::utils::math::deg_to_rad;

/// Euler angles [rad].
///
/// - `pitch` (α): positive nose up
/// - `yaw` (β): positive nose right
/// - `roll` (γ): positive clockwise when viewed from behind
///
/// Applied in the order yaw, then pitch, then roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl EulerAngles {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn from_degrees(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self::new(deg_to_rad(pitch), deg_to_rad(yaw), deg_to_rad(roll))
    }

    fn is_finite(&self) -> bool {
        self.pitch.is_finite() && self.yaw.is_finite() && self.roll.is_finite()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    #[default]
    MetersPerSecond,
    KilometersPerHour,
    Knots,
}

impl SpeedUnit {
    pub fn to_mps(self, speed: f64) -> f64 {
        match self {
            SpeedUnit::MetersPerSecond => speed,
            SpeedUnit::KilometersPerHour => speed * KMH_TO_MPS,
            SpeedUnit::Knots => speed * KNOTS_TO_MPS,
        }
    }
}

/// How the launch velocity is declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum VelocityConfig {
    /// Speed along the body nose axis. Canonical form.
    NoseSpeed {
        speed: f64,
        #[serde(default)]
        unit: SpeedUnit,
    },
    /// Legacy world-frame velocity [m/s]. Angles are applied raw, without the
    /// nose-speed sign convention.
    WorldFrame { velocity: Vector3<f64> },
}

impl Default for VelocityConfig {
    fn default() -> Self {
        VelocityConfig::NoseSpeed {
            speed: 0.0,
            unit: SpeedUnit::MetersPerSecond,
        }
    }
}

/// Declarative scenario parameters as loaded from disk.
///
/// Angles are in degrees here; they are converted once when the scenario is
/// resolved.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Launch position in the Y-up world frame [m].
    pub position: Vector3<f64>,
    #[serde(default)]
    pub velocity: VelocityConfig,
    /// Launch attitude [deg].
    #[serde(default)]
    pub attitude_deg: EulerAngles,
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScenarioError> {
        let config: ScenarioConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        info!("Loading scenario from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Reject values that would poison the integrator with NaN or infinity.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(ScenarioError::NonFinite("position".into()));
        }
        match &self.velocity {
            VelocityConfig::NoseSpeed { speed, .. } if !speed.is_finite() => {
                return Err(ScenarioError::NonFinite("velocity.speed".into()));
            }
            VelocityConfig::WorldFrame { velocity } if !velocity.iter().all(|c| c.is_finite()) => {
                return Err(ScenarioError::NonFinite("velocity.velocity".into()));
            }
            _ => {}
        }
        if !self.attitude_deg.is_finite() {
            return Err(ScenarioError::NonFinite("attitude_deg".into()));
        }
        Ok(())
    }

    /// Attitude converted to radians.
    pub fn angles(&self) -> EulerAngles {
        EulerAngles::from_degrees(
            self.attitude_deg.pitch,
            self.attitude_deg.yaw,
            self.attitude_deg.roll,
        )
    }
}
