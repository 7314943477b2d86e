use std::fmt;
use std::io;

use crate::error::Result;
use crate::models::{DayStatus, DaySummary, Meal, MealSlot};

/// Capitalized slot name for display.
fn slot_label(slot: MealSlot) -> &'static str {
    match slot {
        MealSlot::Breakfast => "Breakfast",
        MealSlot::Lunch => "Lunch",
        MealSlot::Dinner => "Dinner",
        MealSlot::Snack => "Snack",
    }
}

fn status_hint(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Green => "on target",
        DayStatus::Yellow => "slightly off target",
        DayStatus::Red => "far from target",
    }
}

fn macro_line(calories: f64, protein: f64, fat: f64, carbs: f64) -> String {
    format!(
        "{:.0} kcal | P {:.1} g | F {:.1} g | C {:.1} g",
        calories, protein, fat, carbs
    )
}

/// Format a single meal as two lines: label with description, then macros.
pub fn render_meal(slot: MealSlot, meal: &Meal) -> String {
    let description = if meal.description.is_empty() {
        "(no description)"
    } else {
        meal.description.as_str()
    };
    format!(
        "{:<10} {}\n{:<10} {}",
        slot_label(slot),
        description,
        "",
        macro_line(meal.calories, meal.protein, meal.fat, meal.carbs)
    )
}

/// Terminal view of a day summary measured against a goal.
pub struct SummaryView<'a> {
    pub summary: &'a DaySummary,
    pub goal: f64,
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;

        writeln!(f, "=== Day Summary ===")?;
        writeln!(f)?;

        if summary.meals.is_empty() {
            writeln!(f, "No meals found.")?;
        }
        for (slot, meal) in &summary.meals {
            writeln!(f, "{}", render_meal(*slot, meal))?;
        }

        let totals = &summary.totals;
        let diff = totals.calories - self.goal;
        let sign = if diff >= 0.0 { "+" } else { "" };

        writeln!(f)?;
        writeln!(f, "--- Totals ---")?;
        writeln!(
            f,
            "{}",
            macro_line(totals.calories, totals.protein, totals.fat, totals.carbs)
        )?;
        writeln!(f, "Goal: {:.0} kcal ({}{:.0})", self.goal, sign, diff)?;
        writeln!(
            f,
            "Status: {} ({})",
            summary.status.as_str().to_uppercase(),
            status_hint(summary.status)
        )?;

        if !summary.observations.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Observations ---")?;
            writeln!(f, "{}", summary.observations)?;
        }

        if summary.looks_unparsed() {
            writeln!(f)?;
            writeln!(
                f,
                "Could not understand this report. Try rephrasing what you ate."
            )?;
        }

        Ok(())
    }
}

/// Format a day summary for the terminal.
pub fn render_day_summary(summary: &DaySummary, goal: f64) -> String {
    SummaryView { summary, goal }.to_string()
}

/// Print a day summary to stdout.
pub fn display_day_summary(summary: &DaySummary, goal: f64) {
    println!();
    print!("{}", SummaryView { summary, goal });
    println!();
}

/// Write the summary as pretty JSON.
pub fn write_summary_json<W: io::Write>(mut writer: W, summary: &DaySummary) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writeln!(writer)?;
    Ok(())
}

/// Write one CSV row per present meal followed by a `total` row.
pub fn write_summary_csv<W: io::Write>(writer: W, summary: &DaySummary) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["slot", "description", "calories", "protein", "fat", "carbs"])?;

    for (slot, meal) in &summary.meals {
        csv.write_record([
            slot.key().to_string(),
            meal.description.clone(),
            meal.calories.to_string(),
            meal.protein.to_string(),
            meal.fat.to_string(),
            meal.carbs.to_string(),
        ])?;
    }

    let totals = &summary.totals;
    csv.write_record([
        "total".to_string(),
        String::new(),
        totals.calories.to_string(),
        totals.protein.to_string(),
        totals.fat.to_string(),
        totals.carbs.to_string(),
    ])?;

    csv.flush()?;
    Ok(())
}
