pub mod input;

pub use input::{GimbalConfig, InputConfig, ThrottleArbitration, ThrottleConfig};
