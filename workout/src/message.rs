use std::fmt;

/// Computed summary of a single training.
///
/// Values are rendered with three decimals. Inputs are not validated, so zero
/// duration gives `inf` or `NaN` speed and those are printed as is.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// Kilometers per hour
    pub speed: f64,
    /// Kilocalories
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        } = self;

        write!(
            f,
            "Training type: {training_type}; \
             Duration: {duration:.3} h; \
             Distance: {distance:.3} km; \
             Avg speed: {speed:.3} km/h; \
             Calories spent: {calories:.3}."
        )
    }
}
