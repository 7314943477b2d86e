use serde_json::Value;

use super::parse_analysis;
use crate::error::{ReportError, Result};
use crate::models::{DaySummary, UserProfile};

/// A parse request as it arrives from outside the crate:
/// `{"analysisText": "...", "userProfile": {"dailyCalorieGoal": 2000}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub analysis_text: String,
    pub user_profile: UserProfile,
}

impl AnalysisRequest {
    /// Validate the shape of a JSON request.
    ///
    /// Fails on a missing or mistyped field. The report text itself is never
    /// judged here.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| invalid("request must be a JSON object"))?;

        let analysis_text = match object.get("analysisText") {
            Some(Value::String(text)) => text.clone(),
            Some(other) => {
                return Err(invalid(&format!(
                    "analysisText must be a string, got {}",
                    type_name(other)
                )));
            }
            None => return Err(invalid("analysisText is required")),
        };

        let profile = object
            .get("userProfile")
            .ok_or_else(|| invalid("userProfile is required"))?
            .as_object()
            .ok_or_else(|| invalid("userProfile must be an object"))?;

        let goal = match profile.get("dailyCalorieGoal") {
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| invalid("dailyCalorieGoal is out of range"))?,
            Some(other) => {
                return Err(invalid(&format!(
                    "dailyCalorieGoal must be a number, got {}",
                    type_name(other)
                )));
            }
            None => return Err(invalid("userProfile.dailyCalorieGoal is required")),
        };

        Ok(Self {
            analysis_text,
            user_profile: UserProfile::new(goal)?,
        })
    }

    pub fn parse(&self) -> DaySummary {
        parse_analysis(&self.analysis_text, &self.user_profile)
    }
}

/// Validate a JSON request and parse its report.
pub fn parse_request(json: &str) -> Result<DaySummary> {
    Ok(AnalysisRequest::from_json(json)?.parse())
}

fn invalid(message: &str) -> ReportError {
    ReportError::InvalidInput(message.to_string())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
