mod actions;
mod animation;
mod bindings;
mod gimbal;
mod throttle;
mod types;

pub use actions::{GimbalActions, InputTick, ThrottleActions};
pub use animation::{Easing, ReturnAnimation};
pub use bindings::InputBindings;
pub use gimbal::GimbalInputController;
pub use throttle::ThrottleInputController;
pub use types::{
    GimbalCommand, GimbalReadings, GimbalState, GimbalTick, InputSource, PointerEvent,
    ThrottleCommand, ThrottleReadings,
};
