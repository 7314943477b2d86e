use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// nutri_report: parse nutrition reports into meals, daily totals, and a goal status.
#[derive(Parser, Debug)]
#[command(name = "nutri_report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the user profile JSON file (must contain `dailyCalorieGoal`).
    #[arg(short, long, global = true, default_value = "profile.json")]
    pub profile: PathBuf,

    /// Daily calorie goal; overrides the profile file.
    #[arg(short, long, global = true)]
    pub goal: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a report from a file (or stdin) and print the day summary.
    Parse {
        /// Report file; reads stdin when omitted.
        input: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Only show this meal slot (breakfast, lunch, dinner, snack).
        #[arg(short, long)]
        meal: Option<String>,
    },

    /// Parse a JSON request `{"analysisText": ..., "userProfile": {...}}` and print JSON.
    Request {
        /// Request file; reads stdin when omitted.
        input: Option<PathBuf>,
    },

    /// Print the status band for a calorie total.
    Classify {
        /// Calories eaten.
        #[arg(short, long)]
        calories: f64,

        /// Largest difference from the goal that is still green.
        #[arg(long)]
        green_band: Option<f64>,

        /// Largest difference from the goal that is still yellow.
        #[arg(long)]
        yellow_band: Option<f64>,
    },

    /// Write a report in your editor and review it interactively.
    Enter,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}
