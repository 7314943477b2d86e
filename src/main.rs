use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nutri_report_rs::analysis::{StatusBands, parse_analysis, parse_request};
use nutri_report_rs::cli::{Cli, Command, OutputFormat};
use nutri_report_rs::config::{DEFAULT_LOG_FILTER, resolve_profile, save_profile};
use nutri_report_rs::error::{ReportError, Result};
use nutri_report_rs::interface::{
    display_day_summary, prompt_goal, prompt_meal_slot, prompt_report_text, prompt_yes_no,
    render_meal, resolve_slot_name, write_summary_csv, write_summary_json,
};
use nutri_report_rs::models::UserProfile;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            ref input,
            format,
            ref meal,
        } => cmd_parse(&cli, input.as_deref(), format, meal.as_deref()),
        Command::Request { ref input } => cmd_request(input.as_deref()),
        Command::Classify {
            calories,
            green_band,
            yellow_band,
        } => cmd_classify(&cli, calories, green_band, yellow_band),
        Command::Enter => cmd_enter(&cli),
    }
}

/// Read from a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parse a report and print it in the requested format.
fn cmd_parse(
    cli: &Cli,
    input: Option<&Path>,
    format: OutputFormat,
    meal: Option<&str>,
) -> Result<()> {
    let profile = resolve_profile(cli.goal, &cli.profile)?;
    let slot = meal.map(resolve_slot_name).transpose()?;

    let text = read_input(input)?;
    let summary = parse_analysis(&text, &profile);

    if let Some(slot) = slot {
        match summary.meal(slot) {
            Some(m) => println!("{}", render_meal(slot, m)),
            None => println!("No {} in this report.", slot),
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text => display_day_summary(&summary, profile.daily_calorie_goal()),
        OutputFormat::Json => write_summary_json(io::stdout().lock(), &summary)?,
        OutputFormat::Csv => write_summary_csv(io::stdout().lock(), &summary)?,
    }

    Ok(())
}

/// Validate and parse a JSON request, printing the summary as JSON.
fn cmd_request(input: Option<&Path>) -> Result<()> {
    let json = read_input(input)?;
    let summary = parse_request(&json)?;
    write_summary_json(io::stdout().lock(), &summary)
}

/// Print the status band for a calorie total.
fn cmd_classify(
    cli: &Cli,
    calories: f64,
    green_band: Option<f64>,
    yellow_band: Option<f64>,
) -> Result<()> {
    if !calories.is_finite() || calories < 0.0 {
        return Err(ReportError::InvalidInput(
            "calories must be a non-negative number".to_string(),
        ));
    }

    let profile = resolve_profile(cli.goal, &cli.profile)?;
    let defaults = StatusBands::default();
    let bands = StatusBands::new(
        green_band.unwrap_or(defaults.green_max),
        yellow_band.unwrap_or(defaults.yellow_max),
    )?;

    let status = bands.classify(calories, profile.daily_calorie_goal());
    println!(
        "{} ({:.0} kcal vs goal {:.0} kcal)",
        status, calories, profile.daily_calorie_goal()
    );
    Ok(())
}

/// Interactive flow: goal, report text in the editor, summary, single meal.
fn cmd_enter(cli: &Cli) -> Result<()> {
    let profile = match resolve_profile(cli.goal, &cli.profile) {
        Ok(profile) => profile,
        Err(ReportError::MissingGoal) => prompt_new_profile(&cli.profile)?,
        Err(e) => return Err(e),
    };

    let Some(text) = prompt_report_text()? else {
        println!("No report entered.");
        return Ok(());
    };

    let summary = parse_analysis(&text, &profile);
    display_day_summary(&summary, profile.daily_calorie_goal());

    if let Some(slot) = prompt_meal_slot(&summary)? {
        if let Some(meal) = summary.meal(slot) {
            println!("{}", render_meal(slot, meal));
        }
    }

    Ok(())
}

/// Ask for a goal and offer to store it as the profile.
fn prompt_new_profile(path: &Path) -> Result<UserProfile> {
    println!("No profile found at {}.", path.display());
    let profile = UserProfile::new(prompt_goal()?)?;

    if prompt_yes_no("Save this goal as your profile?", true)? {
        save_profile(path, &profile)?;
        println!("Profile saved.");
    }

    Ok(profile)
}
