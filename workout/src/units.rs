//! Metric conversion factors shared by every training kind.

/// Meters in one kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Length of a single step in meters, used for running and walking
pub const LEN_STEP: f64 = 0.65;

/// Length of a single swimming stroke in meters
pub const SWIM_LEN_STEP: f64 = 1.38;

pub const MIN_IN_H: f64 = 60.0;
