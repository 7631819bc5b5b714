mod environment;
mod events;
mod input;
mod scenario;

pub use environment::EnvironmentPlugin;
pub use events::{
    GimbalCommandEvent, InputSessionEnded, ScenarioResolvedEvent, ThrottleCommandEvent,
};
pub use input::{InputControlPlugin, InputSet};
pub use scenario::ScenarioPlugin;
