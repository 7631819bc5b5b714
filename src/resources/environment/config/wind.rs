use bevy::log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Deserializer, Serialize};

/// Declarative wind profile, tagged by `type` in scenario files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WindConfig {
    Constant {
        velocity: Vector3<f64>,
    },
    AltitudeGradient {
        base: Vector3<f64>,
        gradient: f64,
    },
    Sinusoidal {
        amplitude: Vector3<f64>,
        frequency: Vector3<f64>,
    },
    Vortex {
        center: Vector3<f64>,
        strength: f64,
        axis: Vector3<f64>,
    },
    FullGradient {
        base: Vector3<f64>,
        gradient: Vector3<f64>,
    },
    Combined {
        fields: Vec<WindConfig>,
    },
    Turbulent {
        base: Vector3<f64>,
        scale: f64,
    },
    /// Any unrecognised `type`. Resolves to still air.
    #[serde(other)]
    Unknown,
}

impl Default for WindConfig {
    fn default() -> Self {
        WindConfig::Constant {
            velocity: Vector3::zeros(),
        }
    }
}

impl WindConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            WindConfig::Constant { .. } => "Constant",
            WindConfig::AltitudeGradient { .. } => "AltitudeGradient",
            WindConfig::Sinusoidal { .. } => "Sinusoidal",
            WindConfig::Vortex { .. } => "Vortex",
            WindConfig::FullGradient { .. } => "FullGradient",
            WindConfig::Combined { .. } => "Combined",
            WindConfig::Turbulent { .. } => "Turbulent",
            WindConfig::Unknown => "Unknown",
        }
    }
}

/// Deserialize a wind section without ever failing the surrounding document.
///
/// A section that does not parse as any known profile (missing `type`,
/// malformed parameters) becomes [`WindConfig::Unknown`].
pub(crate) fn wind_or_unknown<'de, D>(deserializer: D) -> Result<WindConfig, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Known(WindConfig),
        Other(serde::de::IgnoredAny),
    }

    match Lenient::deserialize(deserializer)? {
        Lenient::Known(config) => Ok(config),
        Lenient::Other(_) => {
            debug!("Wind section did not parse as a known profile");
            Ok(WindConfig::Unknown)
        }
    }
}
