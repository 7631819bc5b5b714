use guidance_core::resources::{GimbalReadings, ThrottleReadings};
use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Random gimbal readings, occasionally beyond the unit circle
pub fn random_gimbal_readings(rng: &mut ChaCha8Rng) -> GimbalReadings {
    let stick_live = rng.gen_bool(0.4);
    GimbalReadings {
        axis: if stick_live {
            nalgebra::Vector2::new(rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5))
        } else {
            nalgebra::Vector2::new(rng.gen_range(-0.05..0.05), rng.gen_range(-0.05..0.05))
        },
        up: rng.gen_bool(0.2),
        down: rng.gen_bool(0.2),
        left: rng.gen_bool(0.2),
        right: rng.gen_bool(0.2),
    }
}

/// Random throttle readings
pub fn random_throttle_readings(rng: &mut ChaCha8Rng) -> ThrottleReadings {
    ThrottleReadings {
        increase_axis: if rng.gen_bool(0.3) { rng.gen_range(0.0..1.0) } else { 0.0 },
        decrease_axis: if rng.gen_bool(0.1) { rng.gen_range(0.0..1.0) } else { 0.0 },
        increase_key: rng.gen_bool(0.3),
        decrease_key: rng.gen_bool(0.3),
    }
}

/// Random world position within a few kilometres of the origin
pub fn random_position(rng: &mut ChaCha8Rng) -> Vector3<f64> {
    Vector3::new(
        rng.gen_range(-5000.0..5000.0),
        rng.gen_range(0.0..10000.0),
        rng.gen_range(-5000.0..5000.0),
    )
}
