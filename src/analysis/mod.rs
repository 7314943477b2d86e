pub mod constants;
pub mod patterns;
pub mod request;
pub mod scanner;
pub mod status;

pub use constants::*;
pub use request::{AnalysisRequest, parse_request};
pub use scanner::{ScanOutput, ScanState, Scanner};
pub use status::{StatusBands, classify_status};

use tracing::debug;

use crate::models::{DaySummary, NutritionTotals, UserProfile};

/// Parse a nutrition report into a day summary using the default status bands.
///
/// Never fails: text that does not follow the template yields empty meals and
/// zero totals.
pub fn parse_analysis(text: &str, profile: &UserProfile) -> DaySummary {
    parse_analysis_with_bands(text, profile, &StatusBands::default())
}

/// Parse a nutrition report, classifying the day with the given bands.
pub fn parse_analysis_with_bands(
    text: &str,
    profile: &UserProfile,
    bands: &StatusBands,
) -> DaySummary {
    let ScanOutput {
        meals,
        observations,
        diagnostics,
    } = Scanner::scan(text);

    let totals = NutritionTotals::from_meals(meals.values());
    let observations = observations.join("\n").trim().to_string();
    let status = bands.classify(totals.calories, profile.daily_calorie_goal());

    debug!(
        meals = meals.len(),
        calories = totals.calories,
        goal = profile.daily_calorie_goal(),
        %status,
        discarded = diagnostics.discarded_lines,
        "parsed nutrition report"
    );

    DaySummary {
        meals,
        totals,
        observations,
        status,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayStatus, MealSlot};

    fn profile(goal: f64) -> UserProfile {
        UserProfile::new(goal).unwrap()
    }

    #[test]
    fn test_header_without_nutrition_is_zero() {
        let summary = parse_analysis("**Breakfast:** Black coffee", &profile(2000.0));
        let breakfast = summary.meal(MealSlot::Breakfast).unwrap();
        assert_eq!(breakfast.description, "Black coffee");
        assert_eq!(breakfast.calories, 0.0);
        assert!(summary.looks_unparsed());
        assert!(!summary.diagnostics.is_parsed());
    }

    #[test]
    fn test_custom_bands_flow_through() {
        let text = "**Lunch:** Wrap\n* 1,850 kcal | 50 g protein | 60 g fat | 250 g carbohydrates";
        let strict = StatusBands::new(100.0, 120.0).unwrap();
        let summary = parse_analysis_with_bands(text, &profile(2000.0), &strict);
        assert_eq!(summary.status, DayStatus::Red);

        let summary = parse_analysis(text, &profile(2000.0));
        assert_eq!(summary.status, DayStatus::Green);
    }

    #[test]
    fn test_observations_trimmed_and_joined() {
        let summary = parse_analysis(
            "💡 **Observations:**\n  Eat more fiber.  \nSleep well.\n\n",
            &profile(2000.0),
        );
        assert_eq!(summary.observations, "Eat more fiber.  \nSleep well.");
    }

    #[test]
    fn test_observations_keep_inner_indentation() {
        let summary = parse_analysis(
            "💡 **Observations:**\nTips:\n    - drink water\n    - sleep",
            &profile(2000.0),
        );
        assert_eq!(summary.observations, "Tips:\n    - drink water\n    - sleep");
    }
}
