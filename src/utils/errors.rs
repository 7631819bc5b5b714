use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: String, value: String },

    #[error("Invalid range for '{name}': min {min} > max {max}")]
    InvalidRange { name: String, min: f64, max: f64 },
}

impl ConfigError {
    pub(crate) fn invalid(name: &str, value: impl ToString) -> Self {
        ConfigError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Non-finite scenario value: {0}")]
    NonFinite(String),
}
