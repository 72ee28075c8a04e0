use std::str::FromStr;

use crate::{
    error::WorkoutError,
    training::{Running, SportsWalking, Swimming, Training, Workout},
};

/// Three-letter code sent by the sensor block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityCode {
    /// `SWM`
    Swimming,
    /// `RUN`
    Running,
    /// `WLK`
    SportsWalking,
}

impl ActivityCode {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Number of values expected in the data package
    pub const fn arity(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::SportsWalking => 4,
        }
    }

    /// Build training from positional values: `action, duration, weight` followed by
    /// `height` for walking or `length_pool, count_pool` for swimming.
    pub fn build(self, data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
        if data.len() != self.arity() {
            return Err(WorkoutError::InvalidArguments {
                code: self.code(),
                expected: self.arity(),
                actual: data.len(),
            });
        }

        let workout = Workout::new(action(data[0])?, data[1], data[2]);

        let training: Box<dyn Training> = match self {
            Self::Swimming => Box::new(Swimming::new(workout, data[3], data[4])),
            Self::Running => Box::new(Running::new(workout)),
            Self::SportsWalking => Box::new(SportsWalking::new(workout, data[3])),
        };

        Ok(training)
    }
}

impl FromStr for ActivityCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|this| this.code() == s)
            .ok_or_else(|| WorkoutError::UnknownActivity(s.to_owned()))
    }
}

fn action(value: f64) -> Result<u64, WorkoutError> {
    // `u64::MAX as f64` rounds up to 2^64 which is already out of range
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(WorkoutError::InvalidAction(value));
    }

    Ok(value as u64)
}

/// Read data received from sensors.
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
    let activity = code.parse::<ActivityCode>()?;

    tracing::debug!(code, ?data, "reading package");

    activity.build(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for activity in ActivityCode::ALL {
            assert_eq!(activity.code().parse::<ActivityCode>(), Ok(activity));
        }
    }

    #[test]
    fn test_dispatch_by_code() {
        let swimming = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let running = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        assert_eq!(swimming.name(), "Swimming");
        assert_eq!(running.name(), "Running");
        assert_eq!(walking.name(), "SportsWalking");
        assert_eq!(walking.workout(), &Workout::new(9000, 1.0, 75.0));
    }

    #[test]
    fn test_unknown_code() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err, WorkoutError::UnknownActivity("XYZ".to_owned()));

        // Codes are case sensitive
        assert!(matches!(
            read_package("run", &[15000.0, 1.0, 75.0]),
            Err(WorkoutError::UnknownActivity(_))
        ));
    }

    #[test]
    fn test_wrong_arity() {
        let err = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::InvalidArguments {
                code: "RUN",
                expected: 3,
                actual: 4,
            }
        );

        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0]),
            Err(WorkoutError::InvalidArguments {
                expected: 5,
                actual: 3,
                ..
            })
        ));
        assert!(matches!(
            read_package("WLK", &[]),
            Err(WorkoutError::InvalidArguments { actual: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_action() {
        assert_eq!(
            read_package("RUN", &[100.5, 1.0, 75.0]).unwrap_err(),
            WorkoutError::InvalidAction(100.5)
        );
        assert!(matches!(
            read_package("RUN", &[-1.0, 1.0, 75.0]),
            Err(WorkoutError::InvalidAction(_))
        ));
        assert!(matches!(
            read_package("RUN", &[f64::NAN, 1.0, 75.0]),
            Err(WorkoutError::InvalidAction(_))
        ));
        assert_eq!(
            read_package("RUN", &[1e20, 1.0, 75.0]).unwrap_err(),
            WorkoutError::InvalidAction(1e20)
        );
        assert!(matches!(
            read_package("RUN", &[u64::MAX as f64, 1.0, 75.0]),
            Err(WorkoutError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_negative_zero_action() {
        let running = read_package("RUN", &[-0.0, 1.0, 75.0]).unwrap();

        assert_eq!(running.workout().action, 0);
        assert_eq!(running.distance_km(), 0.0);
    }

    #[test]
    fn test_large_action_is_exact() {
        // Every whole number up to 2^53 converts without loss
        let action = 2_f64.powi(53);
        let running = read_package("RUN", &[action, 1.0, 75.0]).unwrap();

        assert_eq!(running.workout().action, 1 << 53);
        assert_eq!(running.distance_km(), action * 0.65 / 1000.0);
    }
}
