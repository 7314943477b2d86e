mod meal;
mod profile;
mod summary;

pub use meal::{Meal, MealSlot, NutritionTotals};
pub use profile::UserProfile;
pub use summary::{DayStatus, DaySummary, ParseDiagnostics};
