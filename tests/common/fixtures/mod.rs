mod environment;
mod input;
mod scenario;

// Re-export test fixtures
pub use environment::*;
pub use input::*;
pub use scenario::*;
