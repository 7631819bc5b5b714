use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::utils::constants::TIME_EPSILON;

/// Easing curves for return-to-center. Every curve maps 0 to 0 and 1 to 1
/// exactly and is monotonically non-decreasing in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    QuadIn,
    #[default]
    QuadOut,
    QuadInOut,
    CubicOut,
    SineInOut,
    ExpoOut,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        if t <= 0.0 || t.is_nan() {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::ExpoOut => 1.0 - 2f64.powf(-10.0 * t),
        }
    }
}

/// Owned return-to-center interpolation, advanced once per tick.
///
/// Drives the authoritative and the display value from their own starting
/// points to the same target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnAnimation {
    start: Vector2<f64>,
    display_start: Vector2<f64>,
    target: Vector2<f64>,
    elapsed: f64,
    duration: f64,
    easing: Easing,
}

impl ReturnAnimation {
    pub fn to_center(
        start: Vector2<f64>,
        display_start: Vector2<f64>,
        duration: f64,
        easing: Easing,
    ) -> Self {
        Self {
            start,
            display_start,
            target: Vector2::zeros(),
            elapsed: 0.0,
            duration,
            easing,
        }
    }

    /// Step by `dt` seconds and return `(value, display)`.
    pub fn advance(&mut self, dt: f64) -> (Vector2<f64>, Vector2<f64>) {
        self.elapsed += dt.max(0.0);
        if self.is_finished() {
            return (self.target, self.target);
        }

        let eased = self.easing.sample(self.progress());
        (
            self.start + (self.target - self.start) * eased,
            self.display_start + (self.target - self.display_start) * eased,
        )
    }

    pub fn is_finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed + TIME_EPSILON >= self.duration
    }

    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn target(&self) -> Vector2<f64> {
        self.target
    }
}
