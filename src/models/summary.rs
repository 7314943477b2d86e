use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::meal::{Meal, MealSlot, NutritionTotals};

/// How close a day's calories came to the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Green,
    Yellow,
    Red,
}

impl DayStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DayStatus::Green => "green",
            DayStatus::Yellow => "yellow",
            DayStatus::Red => "red",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the scanner recognised while parsing a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseDiagnostics {
    /// Meal header lines matched.
    pub meal_headers: usize,
    /// Nutrition lines attributed to a meal.
    pub nutrition_lines: usize,
    /// Whether an observations header was found.
    pub observations_found: bool,
    /// Non-empty lines that matched no rule.
    pub discarded_lines: usize,
}

impl ParseDiagnostics {
    /// True when at least one meal received nutrition figures.
    ///
    /// Unlike the calorie heuristic, this tells a logged zero-calorie day
    /// apart from a report that did not follow the template.
    pub fn is_parsed(&self) -> bool {
        self.nutrition_lines > 0
    }

    /// Number of structural lines matched.
    pub fn matched_sections(&self) -> usize {
        self.meal_headers + self.nutrition_lines + usize::from(self.observations_found)
    }
}

/// Parsed day: meals, derived totals, observations, and status.
///
/// The date is not part of the summary; callers attach it when storing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub meals: BTreeMap<MealSlot, Meal>,
    pub totals: NutritionTotals,
    pub observations: String,
    pub status: DayStatus,
    #[serde(default)]
    pub diagnostics: ParseDiagnostics,
}

impl DaySummary {
    pub fn meal(&self, slot: MealSlot) -> Option<&Meal> {
        self.meals.get(&slot)
    }

    /// Legacy failure check used by callers: a zero calorie total is read as
    /// "the report did not match the template".
    pub fn looks_unparsed(&self) -> bool {
        self.totals.calories == 0.0
    }

    /// Recompute totals from the meals and compare with the stored totals.
    pub fn totals_consistent(&self) -> bool {
        NutritionTotals::from_meals(self.meals.values()) == self.totals
    }
}
