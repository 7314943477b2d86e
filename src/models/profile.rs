use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// The part of a user's profile the parser needs.
///
/// The goal is always finite and non-negative: construction and
/// deserialization both validate it. Other profile fields in the JSON
/// document are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct UserProfile {
    #[serde(rename = "dailyCalorieGoal")]
    daily_calorie_goal: f64,
}

/// Unvalidated wire shape of a profile.
#[derive(Deserialize)]
struct RawProfile {
    #[serde(rename = "dailyCalorieGoal")]
    daily_calorie_goal: f64,
}

impl TryFrom<RawProfile> for UserProfile {
    type Error = ReportError;

    fn try_from(raw: RawProfile) -> Result<Self> {
        Self::new(raw.daily_calorie_goal)
    }
}

impl UserProfile {
    /// Create a profile, rejecting goals that are negative or not finite.
    pub fn new(daily_calorie_goal: f64) -> Result<Self> {
        if !daily_calorie_goal.is_finite() {
            return Err(ReportError::InvalidInput(
                "dailyCalorieGoal must be a finite number".to_string(),
            ));
        }
        if daily_calorie_goal < 0.0 {
            return Err(ReportError::InvalidInput(format!(
                "dailyCalorieGoal must be non-negative, got {}",
                daily_calorie_goal
            )));
        }
        Ok(Self { daily_calorie_goal })
    }

    /// Daily calorie goal in kcal.
    pub fn daily_calorie_goal(&self) -> f64 {
        self.daily_calorie_goal
    }
}
