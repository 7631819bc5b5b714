mod config;
mod environment;
mod wind;

pub use config::{EnvironmentConfig, WindConfig};
pub use environment::{build_wind_model, EnvironmentModel};
pub use wind::{
    AltitudeGradientWind, CombinedWind, ConstantWind, FullGradientWind, SinusoidalWind,
    TurbulentWind, VortexWind, WindModel,
};
