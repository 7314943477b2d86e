use std::collections::BTreeMap;

use tracing::trace;

use super::patterns::{
    NutritionFigures, match_meal_header, match_nutrition_line, match_observations_header,
};
use crate::models::{Meal, MealSlot, ParseDiagnostics};

/// Where the scanner is within the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for a meal header or the observations marker.
    Scanning,
    /// A header was seen for this slot and its nutrition line is pending.
    AwaitingNutrition(MealSlot),
    /// Past the observations marker; every further line is commentary.
    InObservations,
}

/// What a single line means in the current state.
#[derive(Debug, Clone, PartialEq)]
enum LineKind<'a> {
    MealHeader(MealSlot, &'a str),
    Nutrition(MealSlot, NutritionFigures),
    ObservationsHeader(&'a str),
    Observation(&'a str),
    Unrecognized,
}

/// Collected result of one scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    pub meals: BTreeMap<MealSlot, Meal>,
    pub observations: Vec<String>,
    pub diagnostics: ParseDiagnostics,
}

/// Line-at-a-time state machine over a nutrition report.
///
/// Blank lines are ignored entirely and never act as section boundaries.
#[derive(Debug)]
pub struct Scanner {
    state: ScanState,
    output: ScanOutput,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Scanning,
            output: ScanOutput::default(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Scan a whole text block.
    pub fn scan(text: &str) -> ScanOutput {
        let mut scanner = Self::new();
        for line in text.lines() {
            scanner.feed(line);
        }
        scanner.finish()
    }

    /// Advance the state machine by one line.
    ///
    /// Structural patterns match the trimmed line; observation lines are kept
    /// as written, minus a trailing carriage return.
    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        match self.classify(raw.trim_end_matches('\r'), line) {
            LineKind::Observation(text) => self.push_observation(text),
            LineKind::MealHeader(slot, description) => self.open_meal(slot, description),
            LineKind::Nutrition(slot, figures) => self.fill_meal(slot, figures),
            LineKind::ObservationsHeader(trailing) => self.open_observations(trailing),
            LineKind::Unrecognized => {
                trace!(state = ?self.state, line, "discarding unrecognized line");
                self.output.diagnostics.discarded_lines += 1;
            }
        }
    }

    pub fn finish(self) -> ScanOutput {
        self.output
    }

    /// Rules are tried in a fixed order: observations passthrough, meal
    /// header, nutrition line (only while a header is pending), observations
    /// header.
    fn classify<'a>(&self, raw: &'a str, line: &'a str) -> LineKind<'a> {
        if self.state == ScanState::InObservations {
            return LineKind::Observation(raw);
        }
        if let Some((slot, description)) = match_meal_header(line) {
            return LineKind::MealHeader(slot, description);
        }
        if let ScanState::AwaitingNutrition(slot) = self.state {
            if let Some(figures) = match_nutrition_line(line) {
                return LineKind::Nutrition(slot, figures);
            }
        }
        if let Some(trailing) = match_observations_header(line) {
            return LineKind::ObservationsHeader(trailing);
        }
        LineKind::Unrecognized
    }

    /// A header always starts a fresh entry, replacing an earlier one for the
    /// same slot. A pending slot that never got its nutrition line keeps zeros.
    fn open_meal(&mut self, slot: MealSlot, description: &str) {
        trace!(%slot, description, "meal header");
        self.output.meals.insert(slot, Meal::described(description));
        self.output.diagnostics.meal_headers += 1;
        self.state = ScanState::AwaitingNutrition(slot);
    }

    fn fill_meal(&mut self, slot: MealSlot, figures: NutritionFigures) {
        trace!(%slot, ?figures, "nutrition line");
        let meal = self.output.meals.entry(slot).or_default();
        meal.calories = figures.calories;
        meal.protein = figures.protein;
        meal.fat = figures.fat;
        meal.carbs = figures.carbs;
        self.output.diagnostics.nutrition_lines += 1;
        self.state = ScanState::Scanning;
    }

    fn open_observations(&mut self, trailing: &str) {
        trace!("observations section");
        self.output.diagnostics.observations_found = true;
        self.state = ScanState::InObservations;
        if !trailing.is_empty() {
            self.push_observation(trailing);
        }
    }

    fn push_observation(&mut self, text: &str) {
        self.output.observations.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let mut scanner = Scanner::new();
        assert_eq!(scanner.state(), ScanState::Scanning);

        scanner.feed("**Lunch:** Salad");
        assert_eq!(scanner.state(), ScanState::AwaitingNutrition(MealSlot::Lunch));

        scanner.feed("Some commentary from the model");
        assert_eq!(scanner.state(), ScanState::AwaitingNutrition(MealSlot::Lunch));

        scanner.feed("* 300 kcal | 20 g protein | 10 g fat | 25 g carbohydrates");
        assert_eq!(scanner.state(), ScanState::Scanning);

        scanner.feed("💡 **Observations:**");
        assert_eq!(scanner.state(), ScanState::InObservations);

        scanner.feed("**Dinner:** not a header anymore");
        assert_eq!(scanner.state(), ScanState::InObservations);

        let output = scanner.finish();
        assert_eq!(output.meals.len(), 1);
        assert_eq!(output.observations, vec!["**Dinner:** not a header anymore"]);
        assert_eq!(output.diagnostics.discarded_lines, 1);
    }

    #[test]
    fn test_second_header_before_nutrition() {
        let output = Scanner::scan(
            "**Breakfast:** Coffee\n\
             **Lunch:** Pasta\n\
             * 600 kcal | 20 g protein | 15 g fat | 90 g carbohydrates",
        );

        let breakfast = &output.meals[&MealSlot::Breakfast];
        assert_eq!(breakfast.description, "Coffee");
        assert!(!breakfast.has_nutrition());
        assert_eq!(output.meals[&MealSlot::Lunch].calories, 600.0);
    }

    #[test]
    fn test_second_nutrition_line_not_attributed() {
        let output = Scanner::scan(
            "**Snack:** Apple\n\
             * 95 kcal | 0 g protein | 0 g fat | 25 g carbohydrates\n\
             * 500 kcal | 10 g protein | 10 g fat | 10 g carbohydrates",
        );

        assert_eq!(output.meals[&MealSlot::Snack].calories, 95.0);
        assert_eq!(output.diagnostics.nutrition_lines, 1);
        assert_eq!(output.diagnostics.discarded_lines, 1);
    }

    #[test]
    fn test_repeated_header_replaces_slot() {
        let output = Scanner::scan(
            "**Dinner:** Soup\n\
             * 200 kcal | 5 g protein | 5 g fat | 30 g carbohydrates\n\
             **Dinner:** Steak\n\
             * 700 kcal | 60 g protein | 45 g fat | 0 g carbohydrates",
        );

        let dinner = &output.meals[&MealSlot::Dinner];
        assert_eq!(dinner.description, "Steak");
        assert_eq!(dinner.calories, 700.0);
        assert_eq!(output.meals.len(), 1);
    }

    #[test]
    fn test_blank_lines_are_not_boundaries() {
        let output = Scanner::scan(
            "**Breakfast:** Toast\n\n   \n* 150 kcal | 5 g protein | 2 g fat | 28 g carbohydrates",
        );
        assert_eq!(output.meals[&MealSlot::Breakfast].calories, 150.0);
        assert_eq!(output.diagnostics.discarded_lines, 0);
    }

    #[test]
    fn test_observation_lines_keep_indentation() {
        let output = Scanner::scan("💡 **Observations:**\nTips:\n    - drink water\r\n\t- sleep  ");
        assert_eq!(output.observations, vec!["Tips:", "    - drink water", "\t- sleep  "]);
    }

    #[test]
    fn test_observations_header_trailing_text_seeds_buffer() {
        let output = Scanner::scan("💡 **Observations:** First line\nSecond line");
        assert_eq!(output.observations, vec!["First line", "Second line"]);
        assert!(output.diagnostics.observations_found);
    }
}
