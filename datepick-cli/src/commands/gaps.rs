use anyhow::Result;
use chrono::NaiveDate;
use datepick_core::compute_excluded_dates;
use datepick_core::day::format_day_list;
use owo_colors::OwoColorize;

/// Excluded days for an ad-hoc set, without touching the stored form.
pub fn run(days: Vec<NaiveDate>, as_json: bool) -> Result<()> {
    let excluded = compute_excluded_dates(&days);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&excluded)?);
    } else {
        println!("{} {}", "Excluded dates:".dimmed(), format_day_list(&excluded));
    }

    Ok(())
}
