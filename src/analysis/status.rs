use crate::analysis::constants::{GREEN_BAND_MAX, YELLOW_BAND_MAX};
use crate::error::{ReportError, Result};
use crate::models::DayStatus;

/// Calorie-difference thresholds for the status bands.
///
/// Each band includes its upper bound: a difference equal to `green_max` is
/// green, one equal to `yellow_max` is yellow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusBands {
    pub green_max: f64,
    pub yellow_max: f64,
}

impl Default for StatusBands {
    fn default() -> Self {
        Self {
            green_max: GREEN_BAND_MAX,
            yellow_max: YELLOW_BAND_MAX,
        }
    }
}

impl StatusBands {
    pub fn new(green_max: f64, yellow_max: f64) -> Result<Self> {
        if !green_max.is_finite() || !yellow_max.is_finite() {
            return Err(ReportError::InvalidInput(
                "status bands must be finite".to_string(),
            ));
        }
        if green_max < 0.0 || yellow_max < green_max {
            return Err(ReportError::InvalidInput(format!(
                "status bands must satisfy 0 <= green ({}) <= yellow ({})",
                green_max, yellow_max
            )));
        }
        Ok(Self {
            green_max,
            yellow_max,
        })
    }

    /// Band for a day's calorie total against the goal.
    pub fn classify(&self, calories: f64, goal: f64) -> DayStatus {
        let diff = (calories - goal).abs();
        if diff > self.yellow_max {
            DayStatus::Red
        } else if diff > self.green_max {
            DayStatus::Yellow
        } else {
            DayStatus::Green
        }
    }
}

/// Classify with the default 200 / 400 kcal bands.
pub fn classify_status(calories: f64, goal: f64) -> DayStatus {
    StatusBands::default().classify(calories, goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_above_goal() {
        assert_eq!(classify_status(2200.0, 2000.0), DayStatus::Green);
        assert_eq!(classify_status(2201.0, 2000.0), DayStatus::Yellow);
        assert_eq!(classify_status(2400.0, 2000.0), DayStatus::Yellow);
        assert_eq!(classify_status(2401.0, 2000.0), DayStatus::Red);
    }

    #[test]
    fn test_band_boundaries_below_goal() {
        assert_eq!(classify_status(1800.0, 2000.0), DayStatus::Green);
        assert_eq!(classify_status(1799.0, 2000.0), DayStatus::Yellow);
        assert_eq!(classify_status(1600.0, 2000.0), DayStatus::Yellow);
        assert_eq!(classify_status(1599.0, 2000.0), DayStatus::Red);
    }

    #[test]
    fn test_zero_calories_against_goal() {
        assert_eq!(classify_status(0.0, 2000.0), DayStatus::Red);
        assert_eq!(classify_status(0.0, 300.0), DayStatus::Yellow);
        assert_eq!(classify_status(0.0, 150.0), DayStatus::Green);
    }

    #[test]
    fn test_custom_bands() {
        let bands = StatusBands::new(100.0, 150.0).unwrap();
        assert_eq!(bands.classify(2100.0, 2000.0), DayStatus::Green);
        assert_eq!(bands.classify(2150.0, 2000.0), DayStatus::Yellow);
        assert_eq!(bands.classify(2151.0, 2000.0), DayStatus::Red);
    }

    #[test]
    fn test_invalid_bands_rejected() {
        assert!(StatusBands::new(500.0, 400.0).is_err());
        assert!(StatusBands::new(-1.0, 400.0).is_err());
        assert!(StatusBands::new(200.0, f64::NAN).is_err());
    }
}
