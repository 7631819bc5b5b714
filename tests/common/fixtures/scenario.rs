use guidance_core::resources::{
    EnvironmentConfig, EulerAngles, ScenarioConfig, SpeedUnit, VelocityConfig,
};
use nalgebra::Vector3;

/// The scenario shipped in `config/scenario.yaml`
pub const SAMPLE_SCENARIO_YAML: &str = include_str!("../../../config/scenario.yaml");

/// Creates a level, wind-free nose-speed scenario
pub fn create_level_scenario(speed: f64) -> ScenarioConfig {
    ScenarioConfig {
        position: Vector3::new(0.0, 1000.0, 0.0),
        velocity: VelocityConfig::NoseSpeed {
            speed,
            unit: SpeedUnit::MetersPerSecond,
        },
        attitude_deg: EulerAngles::default(),
        environment: EnvironmentConfig::default(),
    }
}
