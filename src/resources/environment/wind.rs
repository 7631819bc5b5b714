//! Wind profiles.
//!
//! Every model is a pure function of position: the same position always
//! yields the same vector, with no hidden time or RNG state. Positions are in
//! the Y-up world frame used throughout the crate.

use nalgebra::Vector3;

use crate::utils::constants::TURBULENCE_SPATIAL_SCALE;
use crate::utils::math::normalize_or_zero;

/// A wind field sampled at a world position [m], returning wind velocity [m/s].
pub trait WindModel: Send + Sync {
    fn get_wind(&self, position: &Vector3<f64>) -> Vector3<f64>;
}

/// Uniform wind everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantWind {
    pub velocity: Vector3<f64>,
}

impl ConstantWind {
    pub fn new(velocity: Vector3<f64>) -> Self {
        Self { velocity }
    }

    /// Still air, used whenever a profile cannot be resolved.
    pub fn zero() -> Self {
        Self::new(Vector3::zeros())
    }
}

impl WindModel for ConstantWind {
    fn get_wind(&self, _position: &Vector3<f64>) -> Vector3<f64> {
        self.velocity
    }
}

/// Linear shear with altitude: `base + (0, 0, gradient) * altitude`.
///
/// Altitude is the world Y coordinate; the shear term lands on the world Z
/// component.
#[derive(Debug, Clone, PartialEq)]
pub struct AltitudeGradientWind {
    pub base: Vector3<f64>,
    pub gradient: f64,
}

impl AltitudeGradientWind {
    pub fn new(base: Vector3<f64>, gradient: f64) -> Self {
        Self { base, gradient }
    }
}

impl WindModel for AltitudeGradientWind {
    fn get_wind(&self, position: &Vector3<f64>) -> Vector3<f64> {
        let altitude = position.y;
        self.base + Vector3::new(0.0, 0.0, self.gradient) * altitude
    }
}

/// Per-axis `amplitude_i * sin(frequency_i * position_i)`.
///
/// The frequencies are spatial (rad/m). There is no time dependence.
#[derive(Debug, Clone, PartialEq)]
pub struct SinusoidalWind {
    pub amplitude: Vector3<f64>,
    pub frequency: Vector3<f64>,
}

impl SinusoidalWind {
    pub fn new(amplitude: Vector3<f64>, frequency: Vector3<f64>) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }
}

impl WindModel for SinusoidalWind {
    fn get_wind(&self, position: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self.amplitude.x * (self.frequency.x * position.x).sin(),
            self.amplitude.y * (self.frequency.y * position.y).sin(),
            self.amplitude.z * (self.frequency.z * position.z).sin(),
        )
    }
}

/// Circulation around `axis` through `center`, decaying as `strength / (1 + r)`.
#[derive(Debug, Clone, PartialEq)]
pub struct VortexWind {
    pub center: Vector3<f64>,
    pub strength: f64,
    pub axis: Vector3<f64>,
}

impl VortexWind {
    pub fn new(center: Vector3<f64>, strength: f64, axis: Vector3<f64>) -> Self {
        Self {
            center,
            strength,
            axis,
        }
    }
}

impl WindModel for VortexWind {
    fn get_wind(&self, position: &Vector3<f64>) -> Vector3<f64> {
        let offset = position - self.center;
        // Zero at the center and anywhere on the axis line.
        let direction = normalize_or_zero(&self.axis.cross(&offset));
        direction * (self.strength / (1.0 + offset.norm()))
    }
}

/// `base + gradient ⊙ position` (elementwise, not a dot product).
#[derive(Debug, Clone, PartialEq)]
pub struct FullGradientWind {
    pub base: Vector3<f64>,
    pub gradient: Vector3<f64>,
}

impl FullGradientWind {
    pub fn new(base: Vector3<f64>, gradient: Vector3<f64>) -> Self {
        Self { base, gradient }
    }
}

impl WindModel for FullGradientWind {
    fn get_wind(&self, position: &Vector3<f64>) -> Vector3<f64> {
        self.base + self.gradient.component_mul(position)
    }
}

/// Sum of several fields evaluated at the same position.
pub struct CombinedWind {
    models: Vec<Box<dyn WindModel>>,
}

impl CombinedWind {
    pub fn new(models: Vec<Box<dyn WindModel>>) -> Self {
        Self { models }
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl WindModel for CombinedWind {
    fn get_wind(&self, position: &Vector3<f64>) -> Vector3<f64> {
        self.models
            .iter()
            .fold(Vector3::zeros(), |acc, model| acc + model.get_wind(position))
    }
}

/// `base + scale * noise(position)` with a cheap trigonometric noise surrogate.
///
/// The surrogate is not spatially coherent Perlin noise; it only has to be
/// bounded in [-1, 1] per axis and reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct TurbulentWind {
    pub base: Vector3<f64>,
    pub scale: f64,
}

impl TurbulentWind {
    pub fn new(base: Vector3<f64>, scale: f64) -> Self {
        Self { base, scale }
    }

    fn noise(position: &Vector3<f64>) -> Vector3<f64> {
        let p = position * TURBULENCE_SPATIAL_SCALE;
        Vector3::new(
            (p.x * 1.1).sin() * (p.y * 0.7).cos(),
            (p.y * 0.9).sin() * (p.z * 1.3).cos(),
            (p.z * 1.2).sin() * (p.x * 0.8).cos(),
        )
    }
}

impl WindModel for TurbulentWind {
    fn get_wind(&self, position: &Vector3<f64>) -> Vector3<f64> {
        self.base + Self::noise(position) * self.scale
    }
}
