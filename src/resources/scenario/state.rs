use bevy::prelude::*;
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use super::config::{EulerAngles, ScenarioConfig, VelocityConfig};
use crate::resources::environment::{EnvironmentConfig, EnvironmentModel};

/// Body-frame nose axis.
pub fn body_forward() -> Vector3<f64> {
    Vector3::z()
}

/// World-frame up axis.
pub fn world_up() -> Vector3<f64> {
    Vector3::y()
}

/// One-shot kinematic state handed to the external integrator at session start.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInitialState {
    /// Position in world space [m]
    pub position: Vector3<f64>,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Rotation from body to world frame
    pub orientation: Rotation3<f64>,
    /// The angles `orientation` was built from [rad], as declared
    pub angles: EulerAngles,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LaunchVelocity {
    NoseSpeed(f64),
    WorldFrame(Vector3<f64>),
}

/// Resolves the initial state of a scenario and owns its wind field.
#[derive(Resource, Debug)]
pub struct ScenarioState {
    position: Vector3<f64>,
    launch: LaunchVelocity,
    angles: EulerAngles,
    environment: EnvironmentModel,
}

impl ScenarioState {
    pub fn new(config: &ScenarioConfig) -> Self {
        let angles = config.angles();
        match &config.velocity {
            VelocityConfig::NoseSpeed { speed, unit } => Self::from_nose_speed(
                config.position,
                unit.to_mps(*speed),
                angles,
                &config.environment,
            ),
            VelocityConfig::WorldFrame { velocity } => {
                Self::from_world_frame(config.position, *velocity, angles, &config.environment)
            }
        }
    }

    /// Canonical form: speed [m/s] along the nose axis, angles [rad].
    pub fn from_nose_speed(
        position: Vector3<f64>,
        speed: f64,
        angles: EulerAngles,
        environment: &EnvironmentConfig,
    ) -> Self {
        Self {
            position,
            launch: LaunchVelocity::NoseSpeed(speed),
            angles,
            environment: EnvironmentModel::new(environment),
        }
    }

    /// Adapter for scenarios that declare a world-frame velocity [m/s].
    ///
    /// The velocity is used verbatim. The angles only describe the attitude
    /// and are applied without the nose-speed sign flips.
    pub fn from_world_frame(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        angles: EulerAngles,
        environment: &EnvironmentConfig,
    ) -> Self {
        Self {
            position,
            launch: LaunchVelocity::WorldFrame(velocity),
            angles,
            environment: EnvironmentModel::new(environment),
        }
    }

    /// Body-to-world rotation.
    ///
    /// Nose-speed scenarios negate pitch and yaw before building the basis:
    /// with +Y up and the nose on +Z, a positive rotation about X drops the
    /// nose and a positive rotation about Y swings it left. Roll is used as
    /// given, since a positive rotation about the nose axis already reads as
    /// clockwise from behind.
    pub fn orientation(&self) -> Rotation3<f64> {
        match self.launch {
            LaunchVelocity::NoseSpeed(_) => {
                compose_basis(-self.angles.pitch, -self.angles.yaw, self.angles.roll)
            }
            LaunchVelocity::WorldFrame(_) => {
                compose_basis(self.angles.pitch, self.angles.yaw, self.angles.roll)
            }
        }
    }

    /// World-frame launch velocity [m/s].
    pub fn get_initial_velocity(&self) -> Vector3<f64> {
        match self.launch {
            LaunchVelocity::NoseSpeed(speed) => self.orientation() * body_forward() * speed,
            LaunchVelocity::WorldFrame(velocity) => velocity,
        }
    }

    pub fn get_initial_position(&self) -> Vector3<f64> {
        self.position
    }

    /// Wind [m/s] at a world position [m].
    pub fn sample_wind(&self, position: &Vector3<f64>) -> Vector3<f64> {
        self.environment.get_wind(position)
    }

    pub fn environment(&self) -> &EnvironmentModel {
        &self.environment
    }

    pub fn is_world_frame(&self) -> bool {
        matches!(self.launch, LaunchVelocity::WorldFrame(_))
    }

    /// Bundle the full initial state. Pure: repeated calls are bit-identical.
    pub fn resolve(&self) -> ScenarioInitialState {
        ScenarioInitialState {
            position: self.position,
            velocity: self.get_initial_velocity(),
            orientation: self.orientation(),
            angles: self.angles,
        }
    }
}

/// Yaw about world up, then pitch about the yawed X axis, then roll about the
/// nose: `R = Ry(yaw) * Rx(pitch) * Rz(roll)`.
fn compose_basis(pitch: f64, yaw: f64, roll: f64) -> Rotation3<f64> {
    let yaw_rot = Rotation3::from_axis_angle(&Vector3::y_axis(), yaw);
    let pitch_rot = Rotation3::from_axis_angle(&Vector3::x_axis(), pitch);
    let roll_rot = Rotation3::from_axis_angle(&Vector3::z_axis(), roll);
    yaw_rot * pitch_rot * roll_rot
}
