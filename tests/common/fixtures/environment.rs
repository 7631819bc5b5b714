use guidance_core::resources::WindConfig;
use nalgebra::Vector3;

/// One instance of every wind profile, including a nested combination
pub fn create_all_wind_profiles() -> Vec<WindConfig> {
    let constant = WindConfig::Constant {
        velocity: Vector3::new(4.0, 0.0, -2.0),
    };
    let vortex = WindConfig::Vortex {
        center: Vector3::new(100.0, 500.0, 100.0),
        strength: 30.0,
        axis: Vector3::y(),
    };
    vec![
        constant.clone(),
        WindConfig::AltitudeGradient {
            base: Vector3::new(1.0, 0.0, 0.0),
            gradient: 0.003,
        },
        WindConfig::Sinusoidal {
            amplitude: Vector3::new(2.0, 0.5, 1.0),
            frequency: Vector3::new(0.01, 0.02, 0.005),
        },
        vortex.clone(),
        WindConfig::FullGradient {
            base: Vector3::new(0.0, 0.0, 1.0),
            gradient: Vector3::new(0.001, -0.002, 0.0005),
        },
        WindConfig::Turbulent {
            base: Vector3::new(5.0, 0.0, 0.0),
            scale: 2.0,
        },
        WindConfig::Combined {
            fields: vec![constant, vortex],
        },
        WindConfig::Unknown,
    ]
}
