//! # Workout
//!
//! Distance, mean speed and spent calories for running, sports walking and swimming
//! based on raw sensor packages.
//!
//! Package is a workout code together with positional values:
//!
//! - `SWM` - `action, duration, weight, length_pool, count_pool`
//! - `RUN` - `action, duration, weight`
//! - `WLK` - `action, duration, weight, height`
//!
//! Where `action` is number of steps (strokes for swimming), `duration` is in hours,
//! `weight` in kilograms, `height` in centimeters and `length_pool` in meters.

mod error;
mod message;
mod package;
mod training;
pub mod units;

pub use self::{error::*, message::*, package::*, training::*};

/// Sample packages from the sensor block.
pub const PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Read package and compute its summary.
pub fn summarize(code: &str, data: &[f64]) -> Result<InfoMessage, WorkoutError> {
    read_package(code, data).map(|training| training.show_training_info())
}

/// Summaries for every package in the same order. Failed package doesn't affect others.
pub fn run<'a>(
    packages: impl IntoIterator<Item = (&'a str, &'a [f64])>,
) -> Vec<Result<InfoMessage, WorkoutError>> {
    packages
        .into_iter()
        .map(|(code, data)| summarize(code, data))
        .collect()
}
