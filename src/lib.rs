//! Environment and input core for a guided-projectile flight simulation.
//!
//! - [`resources::environment`]: deterministic wind fields
//! - [`resources::scenario`]: initial-state resolution from scenario files
//! - [`resources::input`]: gimbal and throttle input arbitration
//! - [`plugins`]: bevy wiring for all of the above

pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
