use dialoguer::{Confirm, Editor, Input, Select};
use strsim::jaro_winkler;

use crate::error::{ReportError, Result};
use crate::models::{DaySummary, MealSlot};

/// Minimum similarity for suggesting a slot name.
const SLOT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Closest slot name to a mistyped input, if any is close enough.
pub fn suggest_slot(input: &str) -> Option<MealSlot> {
    let input = input.trim().to_lowercase();
    MealSlot::ALL
        .into_iter()
        .map(|slot| (slot, jaro_winkler(slot.key(), &input)))
        .filter(|(_, score)| *score > SLOT_SIMILARITY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(slot, _)| slot)
}

/// Resolve a slot name given on the command line.
///
/// Exact (case-insensitive) names resolve directly; anything else is an
/// error carrying the closest suggestion.
pub fn resolve_slot_name(input: &str) -> Result<MealSlot> {
    if let Some(slot) = MealSlot::from_keyword(input) {
        return Ok(slot);
    }

    let hint = suggest_slot(input)
        .map(|slot| format!(" (did you mean '{}'?)", slot))
        .unwrap_or_default();
    Err(ReportError::UnknownMealSlot {
        input: input.to_string(),
        hint,
    })
}

/// Prompt for the daily calorie goal.
pub fn prompt_goal() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your daily calorie goal?")
        .default("2000".to_string())
        .interact_text()?;

    let goal: f64 = input
        .trim()
        .parse()
        .map_err(|_| ReportError::InvalidInput("Invalid number".to_string()))?;

    if !goal.is_finite() || goal < 0.0 {
        return Err(ReportError::InvalidInput(
            "Goal must be a non-negative number".to_string(),
        ));
    }

    Ok(goal)
}

/// Open the user's editor for the report text.
///
/// Returns `None` if the editor was closed without saving.
pub fn prompt_report_text() -> Result<Option<String>> {
    let template = "**Breakfast:** \n\
                    * 0 kcal | 0 g protein | 0 g fat | 0 g carbohydrates\n\
                    💡 **Observations:**\n";

    Ok(Editor::new().extension(".md").edit(template)?)
}

/// Ask which meal to inspect, accepting typos among the slots present in the
/// summary.
pub fn prompt_meal_slot(summary: &DaySummary) -> Result<Option<MealSlot>> {
    let present: Vec<MealSlot> = summary.meals.keys().copied().collect();
    if present.is_empty() {
        return Ok(None);
    }

    loop {
        let input: String = Input::new()
            .with_prompt("Show which meal? (press Enter to skip)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Some(slot) = MealSlot::from_keyword(input) {
            if present.contains(&slot) {
                return Ok(Some(slot));
            }
            println!("No {} logged today.", slot);
            continue;
        }

        match suggest_slot(input).filter(|slot| present.contains(slot)) {
            Some(slot) => {
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", slot))
                    .default(true)
                    .interact()?;
                if confirm {
                    return Ok(Some(slot));
                }
            }
            None => {
                let options: Vec<&str> = present.iter().map(|s| s.key()).collect();
                let mut selection_options = options.clone();
                selection_options.push("None of these");

                let selection = Select::new()
                    .with_prompt(format!("No meal matches '{}'. Pick one", input))
                    .items(&selection_options)
                    .default(0)
                    .interact()?;

                if selection < options.len() {
                    return Ok(Some(present[selection]));
                }
                return Ok(None);
            }
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
