mod input;

pub use input::{
    advance_input_tick, gimbal_input_system, read_input_devices, reset_input_on_session_end,
    throttle_input_system,
};
