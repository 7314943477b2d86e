//! Line patterns of the report template.
//!
//! ```text
//! **Breakfast:** Oatmeal with fruit
//! * 350 kcal | 12 g protein | 8 g fat | 55 g carbohydrates
//! 💡 **Observations:**
//! Good protein intake today.
//! ```
//!
//! Each matcher looks at a single trimmed line and knows nothing about the
//! lines around it; ordering and attribution live in the scanner.

use std::sync::LazyLock;

use regex::Regex;

use super::constants::{OBSERVATIONS_MARKER, THOUSANDS_SEPARATOR};
use crate::models::MealSlot;

static MEAL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:\*\*)?\s*(breakfast|lunch|dinner|snack)\s*(?:\*\*)?\s*:\s*(?:\*\*)?\s*(.*)$",
    )
    .expect("meal header pattern is valid")
});

static NUTRITION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^[*\-•]\s*",
        r"([\d.,]*)\s*kcal\s*\|\s*",
        r"([\d.,]*)\s*g\s*protein\s*\|\s*",
        r"([\d.,]*)\s*g\s*fat\s*\|\s*",
        r"([\d.,]*)\s*g\s*carbohydrates?",
    ))
    .expect("nutrition line pattern is valid")
});

static OBSERVATIONS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^{}\s*(?:\*\*)?\s*(?:observations?\b)?\s*:?\s*(?:\*\*)?\s*:?\s*(.*)$",
        regex::escape(OBSERVATIONS_MARKER)
    ))
    .expect("observations header pattern is valid")
});

/// The four figures of one nutrition line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionFigures {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// Match `**Lunch:** Chicken salad`, returning the slot and the trimmed
/// description.
pub fn match_meal_header(line: &str) -> Option<(MealSlot, &str)> {
    let caps = MEAL_HEADER.captures(line)?;
    let slot = MealSlot::from_keyword(caps.get(1)?.as_str())?;
    let description = caps.get(2).map_or("", |m| m.as_str().trim());
    Some((slot, description))
}

/// Match `* 450 kcal | 35 g protein | 20 g fat | 30 g carbohydrates`.
///
/// A matched line with an empty or malformed number yields 0 for that figure.
pub fn match_nutrition_line(line: &str) -> Option<NutritionFigures> {
    let caps = NUTRITION_LINE.captures(line)?;
    let figure = |idx| parse_quantity(caps.get(idx).map(|m| m.as_str()));
    Some(NutritionFigures {
        calories: figure(1),
        protein: figure(2),
        fat: figure(3),
        carbs: figure(4),
    })
}

/// Match `💡 **Observations:** optional text`, returning the trailing text
/// (possibly empty).
pub fn match_observations_header(line: &str) -> Option<&str> {
    let caps = OBSERVATIONS_HEADER.captures(line)?;
    Some(caps.get(1).map_or("", |m| m.as_str().trim()))
}

/// Convert a captured number, stripping thousands separators.
///
/// Missing, malformed, negative, or non-finite input becomes 0.
pub fn parse_quantity(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|&c| c != THOUSANDS_SEPARATOR)
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_header_variants() {
        assert_eq!(
            match_meal_header("**Breakfast:** Oatmeal with fruit"),
            Some((MealSlot::Breakfast, "Oatmeal with fruit"))
        );
        assert_eq!(
            match_meal_header("**breakfast:** Eggs"),
            Some((MealSlot::Breakfast, "Eggs"))
        );
        assert_eq!(
            match_meal_header("**BREAKFAST:** Eggs"),
            Some((MealSlot::Breakfast, "Eggs"))
        );
        assert_eq!(match_meal_header("Breakfast: Eggs"), Some((MealSlot::Breakfast, "Eggs")));
        assert_eq!(match_meal_header("**Dinner**: Soup"), Some((MealSlot::Dinner, "Soup")));
        assert_eq!(match_meal_header("Snack:"), Some((MealSlot::Snack, "")));
    }

    #[test]
    fn test_meal_header_requires_colon_after_keyword() {
        assert_eq!(match_meal_header("Lunchbox: sandwich"), None);
        assert_eq!(match_meal_header("Breakfast was great"), None);
        assert_eq!(match_meal_header("I had breakfast: eggs"), None);
    }

    #[test]
    fn test_nutrition_line() {
        let figures =
            match_nutrition_line("* 350 kcal | 12 g protein | 8 g fat | 55 g carbohydrates")
                .unwrap();
        assert_eq!(
            figures,
            NutritionFigures {
                calories: 350.0,
                protein: 12.0,
                fat: 8.0,
                carbs: 55.0
            }
        );
    }

    #[test]
    fn test_nutrition_line_loose_formatting() {
        let figures =
            match_nutrition_line("- 1,250 KCAL|40.5g Protein | 10g fat | 120 g Carbohydrates")
                .unwrap();
        assert_eq!(figures.calories, 1250.0);
        assert_eq!(figures.protein, 40.5);
        assert_eq!(figures.fat, 10.0);
        assert_eq!(figures.carbs, 120.0);
    }

    #[test]
    fn test_nutrition_line_missing_numbers_become_zero() {
        let figures =
            match_nutrition_line("* kcal | 1.2.3 g protein | g fat | 5 g carbohydrates").unwrap();
        assert_eq!(figures.calories, 0.0);
        assert_eq!(figures.protein, 0.0);
        assert_eq!(figures.fat, 0.0);
        assert_eq!(figures.carbs, 5.0);
    }

    #[test]
    fn test_nutrition_line_requires_bullet() {
        assert!(match_nutrition_line("350 kcal | 12 g protein | 8 g fat | 55 g carbohydrates").is_none());
        assert!(match_nutrition_line("* about 350 kcal").is_none());
    }

    #[test]
    fn test_observations_header() {
        assert_eq!(match_observations_header("💡 **Observations:**"), Some(""));
        assert_eq!(
            match_observations_header("💡 **Observations:** Drink more water."),
            Some("Drink more water.")
        );
        assert_eq!(match_observations_header("💡 observations: ok"), Some("ok"));
        assert_eq!(match_observations_header("💡 Keep it up"), Some("Keep it up"));
        assert_eq!(match_observations_header("**Observations:**"), None);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(Some("1,200")), 1200.0);
        assert_eq!(parse_quantity(Some("12.5")), 12.5);
        assert_eq!(parse_quantity(Some("")), 0.0);
        assert_eq!(parse_quantity(Some("abc")), 0.0);
        assert_eq!(parse_quantity(Some("-5")), 0.0);
        assert_eq!(parse_quantity(None), 0.0);
    }
}
