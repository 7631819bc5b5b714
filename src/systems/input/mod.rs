mod control;
mod devices;

pub use control::{
    advance_input_tick, gimbal_input_system, reset_input_on_session_end, throttle_input_system,
};
pub use devices::read_input_devices;
