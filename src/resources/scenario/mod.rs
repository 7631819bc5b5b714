mod config;
mod state;

pub use config::{EulerAngles, ScenarioConfig, SpeedUnit, VelocityConfig};
pub use state::{body_forward, world_up, ScenarioInitialState, ScenarioState};
