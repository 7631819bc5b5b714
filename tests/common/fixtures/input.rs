use guidance_core::resources::{
    Easing, GimbalConfig, InputConfig, ThrottleArbitration, ThrottleConfig,
};
use nalgebra::Vector2;

/// Timestep that keeps the throttle timer arithmetic exact
pub const TEST_TICK: f64 = 1.0 / 64.0;

/// Creates an input configuration with round numbers for testing
pub fn create_test_input_config() -> InputConfig {
    InputConfig {
        gimbal: GimbalConfig {
            joystick_deadzone: 0.1,
            mouse_deadzone: 1.0,
            mouse_radius: 50.0,
            pointer_center: Vector2::new(200.0, 200.0),
            smoothing: 0.5,
            return_duration: 0.25,
            return_easing: Easing::QuadOut,
            ..Default::default()
        },
        throttle: ThrottleConfig {
            increment_rate: 1.0,
            min: 0.0,
            max: 1.0,
            default: 0.0,
            joystick_deadzone: 0.05,
            cooldown: 0.25,
            arbitration: ThrottleArbitration::PriorityCooldown,
            ..Default::default()
        },
    }
}

/// Same as the test config but with additive throttle blending
pub fn create_additive_input_config() -> InputConfig {
    let mut config = create_test_input_config();
    config.throttle.arbitration = ThrottleArbitration::AdditiveBlend;
    config
}

/// The input config shipped in `config/input.yaml`
pub const SAMPLE_INPUT_YAML: &str = include_str!("../../../config/input.yaml");
