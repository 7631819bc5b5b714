use approx::assert_relative_eq;
use guidance_core::resources::GimbalCommand;
use nalgebra::Vector3;

/// Assert a gimbal command respects the unit-circle bound
#[track_caller]
pub fn assert_gimbal_in_unit_circle(command: &GimbalCommand) {
    assert!(command.x.is_finite(), "Gimbal x is not finite");
    assert!(command.y.is_finite(), "Gimbal y is not finite");
    assert!(
        command.magnitude() <= 1.0 + 1e-9,
        "Gimbal magnitude {} exceeds 1",
        command.magnitude()
    );
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert a sequence never grows from one sample to the next
#[track_caller]
pub fn assert_non_increasing(values: &[f64]) {
    for pair in values.windows(2) {
        assert!(
            pair[1] <= pair[0] + 1e-12,
            "Sequence increased from {} to {}",
            pair[0],
            pair[1]
        );
    }
}
