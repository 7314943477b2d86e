use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::models::UserProfile;

/// Load a user profile from a JSON file.
///
/// Only `dailyCalorieGoal` is read. An invalid goal fails deserialization.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;

    debug!(path = %path.display(), goal = profile.daily_calorie_goal(), "loaded profile");
    Ok(profile)
}

/// Save a user profile as pretty JSON.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &UserProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

/// Pick the profile for a run: an explicit goal wins over the profile file.
///
/// A missing profile file without a goal override is `MissingGoal`; a file
/// that exists but is unreadable or malformed is reported as such.
pub fn resolve_profile<P: AsRef<Path>>(goal: Option<f64>, path: P) -> Result<UserProfile> {
    if let Some(goal) = goal {
        info!(goal, "using goal from command line");
        return UserProfile::new(goal);
    }

    let path = path.as_ref();
    if !path.exists() {
        return Err(ReportError::MissingGoal);
    }
    load_profile(path)
}
