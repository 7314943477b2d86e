use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `hint` is either empty or a " (did you mean ...?)" suffix.
    #[error("Unknown meal slot '{input}'{hint}")]
    UnknownMealSlot { input: String, hint: String },

    #[error("No daily calorie goal: pass --goal or provide a profile file")]
    MissingGoal,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
