//! # Training kinds
//!
//! Every kind shares base formulas:
//!
//! ```notrust
//! distance = action * LEN_STEP / M_IN_KM
//! speed = distance / duration
//! ```
//!
//! Calories are specific for each kind:
//!
//! - Running - `(18 * speed - 20) * weight / M_IN_KM * duration_min`
//! - Sports walking - `(0.035 * weight + floor(speed^2 / height) * 0.029 * weight) * duration_min`
//! - Swimming - `(speed + 1.1) * 2 * weight`, where speed is based on pool length and laps

use std::fmt::Debug;

use crate::{
    message::InfoMessage,
    units::{LEN_STEP, M_IN_KM, MIN_IN_H, SWIM_LEN_STEP},
};

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Raw sensor readings shared by all training kinds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workout {
    /// Steps for running and walking, strokes for swimming
    pub action: u64,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

impl Workout {
    pub const fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    const fn duration_min(&self) -> f64 {
        self.duration * MIN_IN_H
    }
}

pub trait Training: Debug {
    fn name(&self) -> &'static str;

    fn workout(&self) -> &Workout;

    /// Meters covered by a single action
    fn step_length_m(&self) -> f64 {
        LEN_STEP
    }

    fn distance_km(&self) -> f64 {
        self.workout().action as f64 * self.step_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.workout().duration
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        let info = InfoMessage {
            training_type: self.name().to_owned(),
            duration: self.workout().duration,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        };

        tracing::trace!(?info, "computed training info");

        info
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Running {
    pub workout: Workout,
}

impl Running {
    pub const fn new(workout: Workout) -> Self {
        Self { workout }
    }
}

impl Training for Running {
    fn name(&self) -> &'static str {
        "Running"
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn spent_calories(&self) -> f64 {
        (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() - RUN_SPEED_SHIFT) * self.workout.weight
            / M_IN_KM
            * self.workout.duration_min()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SportsWalking {
    pub workout: Workout,
    /// Centimeters
    pub height: f64,
}

impl SportsWalking {
    pub const fn new(workout: Workout, height: f64) -> Self {
        Self { workout, height }
    }
}

impl Training for SportsWalking {
    fn name(&self) -> &'static str {
        "SportsWalking"
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn spent_calories(&self) -> f64 {
        let Workout { weight, .. } = self.workout;

        // Speed to height ratio is truncated to whole units
        let ratio = (self.mean_speed_kmh().powi(2) / self.height).floor();

        (WALK_WEIGHT_MULTIPLIER * weight + ratio * WALK_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.workout.duration_min()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swimming {
    pub workout: Workout,
    /// Meters
    pub length_pool: f64,
    /// How many times the pool was crossed
    pub count_pool: f64,
}

impl Swimming {
    pub const fn new(workout: Workout, length_pool: f64, count_pool: f64) -> Self {
        Self {
            workout,
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn step_length_m(&self) -> f64 {
        SWIM_LEN_STEP
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.workout.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.workout.weight
    }
}
