mod wind;

pub use wind::WindConfig;

use bevy::prelude::Resource;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default, deserialize_with = "wind::wind_or_unknown")]
    pub wind_model_config: WindConfig,
}

impl EnvironmentConfig {
    pub fn new(wind_config: WindConfig) -> Self {
        Self {
            wind_model_config: wind_config,
        }
    }

    /// Horizontal wind from a speed [m/s] and the bearing it blows towards
    /// [deg], measured from world +Z towards world +X.
    pub fn with_constant_wind(wind_speed: f64, wind_bearing: f64) -> Self {
        let angle_rad = wind_bearing.to_radians();
        let velocity = Vector3::new(
            wind_speed * angle_rad.sin(),
            0.0,
            wind_speed * angle_rad.cos(),
        );

        Self::new(WindConfig::Constant { velocity })
    }

    pub fn with_turbulence(base: Vector3<f64>, scale: f64) -> Self {
        Self::new(WindConfig::Turbulent { base, scale })
    }
}
