use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Workout code doesn't map to any known training kind
    #[error("Unknown activity code '{0}'")]
    UnknownActivity(String),

    #[error("Invalid arguments for '{code}': expected {expected} values, got {actual}")]
    InvalidArguments {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Number of steps or strokes must be a non-negative whole number
    #[error("Invalid action count {0}")]
    InvalidAction(f64),
}
