use nalgebra::{Vector2, Vector3};
use std::f64::consts::PI;

use super::constants::NORMALIZE_EPSILON;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Unit vector in the direction of `v`, or zero when `v` has no usable length.
pub fn normalize_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm > NORMALIZE_EPSILON && norm.is_finite() {
        v / norm
    } else {
        Vector3::zeros()
    }
}

/// Scale `v` back onto the unit circle if it lies outside it.
///
/// Vectors already inside the circle are returned unchanged, so a stick
/// deflection of 0.5 stays 0.5 while a keyboard diagonal of (1, 1) becomes
/// (0.707, 0.707).
pub fn clamp_to_unit_circle(v: &Vector2<f64>) -> Vector2<f64> {
    clamp_to_radius(v, 1.0)
}

/// Scale `v` back onto the circle of `radius` if it lies outside it.
pub fn clamp_to_radius(v: &Vector2<f64>, radius: f64) -> Vector2<f64> {
    let norm = v.norm();
    if !norm.is_finite() {
        return Vector2::zeros();
    }
    if norm > radius {
        v * (radius / norm)
    } else {
        *v
    }
}
