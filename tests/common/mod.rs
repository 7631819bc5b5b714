mod assertions;
mod fixtures;
mod helpers;

// Re-export
pub use assertions::{assert_gimbal_in_unit_circle, assert_non_increasing, assert_vector_eq};

pub use helpers::*;

pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
