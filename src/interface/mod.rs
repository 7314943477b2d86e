pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_goal, prompt_meal_slot, prompt_report_text, prompt_yes_no, resolve_slot_name,
    suggest_slot,
};
pub use render::{
    SummaryView, display_day_summary, render_day_summary, render_meal, write_summary_csv,
    write_summary_json,
};
