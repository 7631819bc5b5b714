pub mod config;
pub mod environment;
pub mod input;
pub mod scenario;

pub use config::{GimbalConfig, InputConfig, ThrottleArbitration, ThrottleConfig};
pub use environment::{EnvironmentConfig, EnvironmentModel, WindConfig, WindModel};
pub use input::{
    Easing, GimbalActions, GimbalCommand, GimbalInputController, GimbalReadings, GimbalState,
    GimbalTick, InputBindings, InputSource, InputTick, PointerEvent, ThrottleActions,
    ThrottleCommand, ThrottleInputController, ThrottleReadings,
};
pub use scenario::{
    EulerAngles, ScenarioConfig, ScenarioInitialState, ScenarioState, SpeedUnit, VelocityConfig,
};
