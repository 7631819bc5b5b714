use bevy::prelude::*;
use nalgebra::Vector3;

use super::config::{EnvironmentConfig, WindConfig};
use super::wind::{
    AltitudeGradientWind, CombinedWind, ConstantWind, FullGradientWind, SinusoidalWind,
    TurbulentWind, VortexWind, WindModel,
};

/// The resolved wind field for a session. Read-only once built.
#[derive(Resource)]
pub struct EnvironmentModel {
    wind_model: Box<dyn WindModel>,
    kind: &'static str,
}

impl EnvironmentModel {
    pub fn new(config: &EnvironmentConfig) -> Self {
        let wind_config = &config.wind_model_config;
        if matches!(wind_config, WindConfig::Unknown) {
            warn!("Unknown wind profile, using still air");
        }

        Self {
            wind_model: build_wind_model(wind_config),
            kind: wind_config.kind(),
        }
    }

    /// Wind velocity [m/s] at a world position [m].
    pub fn get_wind(&self, position: &Vector3<f64>) -> Vector3<f64> {
        self.wind_model.get_wind(position)
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Default for EnvironmentModel {
    fn default() -> Self {
        Self::new(&EnvironmentConfig::default())
    }
}

impl std::fmt::Debug for EnvironmentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentModel")
            .field("kind", &self.kind)
            .finish()
    }
}

/// Build a boxed wind model from its declarative form.
pub fn build_wind_model(config: &WindConfig) -> Box<dyn WindModel> {
    match config {
        WindConfig::Constant { velocity } => Box::new(ConstantWind::new(*velocity)),
        WindConfig::AltitudeGradient { base, gradient } => {
            Box::new(AltitudeGradientWind::new(*base, *gradient))
        }
        WindConfig::Sinusoidal {
            amplitude,
            frequency,
        } => Box::new(SinusoidalWind::new(*amplitude, *frequency)),
        WindConfig::Vortex {
            center,
            strength,
            axis,
        } => Box::new(VortexWind::new(*center, *strength, *axis)),
        WindConfig::FullGradient { base, gradient } => {
            Box::new(FullGradientWind::new(*base, *gradient))
        }
        WindConfig::Combined { fields } => Box::new(CombinedWind::new(
            fields.iter().map(build_wind_model).collect(),
        )),
        WindConfig::Turbulent { base, scale } => Box::new(TurbulentWind::new(*base, *scale)),
        WindConfig::Unknown => Box::new(ConstantWind::zero()),
    }
}
