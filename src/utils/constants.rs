// Unit conversions
pub const KNOTS_TO_MPS: f64 = 0.514_444_444; // m/s per knot
pub const KMH_TO_MPS: f64 = 1.0 / 3.6; // m/s per km/h

// Tick timing
pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0; // 120 Hz input tick
pub const TIME_EPSILON: f64 = 1e-9; // s, absorbs accumulated subtraction error on timers

// Input thresholds
pub const GIMBAL_CENTER_EPSILON: f64 = 1e-3; // return-to-center snaps below this magnitude
pub const THROTTLE_NOTIFY_EPSILON: f64 = 1e-4; // smallest throttle change worth notifying
pub const NORMALIZE_EPSILON: f64 = 1e-12; // vectors shorter than this are treated as zero

// Turbulence surrogate
pub const TURBULENCE_SPATIAL_SCALE: f64 = 0.1; // 1/m, stretches noise over ~10 m cells
