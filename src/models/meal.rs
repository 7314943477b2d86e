use std::fmt;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// One of the four fixed buckets a day's intake is logged under.
///
/// Ordering follows the course of the day, which is also the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Lowercase key used in summaries and JSON.
    pub fn key(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }

    /// Match a report keyword (case-insensitive). Only the four English
    /// keywords are recognised; there are no synonyms.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.key().eq_ignore_ascii_case(word.trim()))
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One logged eating occasion.
///
/// Calories are in kcal, macros in grams. Numbers the report did not supply
/// stay at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub description: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Meal {
    /// A meal with a description and no nutrition data yet.
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Whether any nutrition figure was recorded.
    pub fn has_nutrition(&self) -> bool {
        self.calories > 0.0 || self.protein > 0.0 || self.fat > 0.0 || self.carbs > 0.0
    }
}

/// Element-wise sum of the meals in a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl NutritionTotals {
    /// Sum the nutrition figures of the given meals.
    pub fn from_meals<'a>(meals: impl IntoIterator<Item = &'a Meal>) -> Self {
        let mut totals = Self::default();
        for meal in meals {
            totals += meal;
        }
        totals
    }
}

impl AddAssign<&Meal> for NutritionTotals {
    fn add_assign(&mut self, meal: &Meal) {
        self.calories += meal.calories;
        self.protein += meal.protein;
        self.fat += meal.fat;
        self.carbs += meal.carbs;
    }
}
