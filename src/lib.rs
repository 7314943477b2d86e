pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;

pub use analysis::{parse_analysis, parse_request};
pub use error::{ReportError, Result};
pub use models::{DayStatus, DaySummary, Meal, MealSlot, NutritionTotals, UserProfile};
