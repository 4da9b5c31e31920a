//! Terminal rendering for datepick types.
//!
//! Extension traits that add colored output to datepick-core types using
//! owo_colors.

use chrono::{Datelike, NaiveDate};
use datepick_core::day::{format_day_list, format_short};
use datepick_core::month::DAYS_OF_WEEK;
use datepick_core::{DayState, GridCell, MultiDatePicker, ToggleOutcome};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for ToggleOutcome {
    fn render(&self) -> String {
        match self {
            ToggleOutcome::Added(d) => format!("{} {}", "+".green(), format_short(d).green()),
            ToggleOutcome::Removed(d) => format!("{} {}", "-".yellow(), format_short(d).yellow()),
            ToggleOutcome::IgnoredPast(d) => {
                format!("{} {}", "!".red(), format!("{} is in the past, ignored", format_short(d)).dimmed())
            }
        }
    }
}

/// One grid square, three characters wide. Padding days from the
/// neighbouring months keep their selection colours but grey text.
fn render_cell(picker: &MultiDatePicker, cell: &GridCell, today: NaiveDate) -> String {
    let label = format!("{:>3}", cell.date.day());

    match (picker.day_state(&cell.date, today), cell.in_month) {
        (DayState::Selected, true) => label.black().on_bright_red().bold().to_string(),
        (DayState::Selected, false) => label.bright_black().on_bright_red().to_string(),
        (DayState::Excluded, true) => label.black().on_white().to_string(),
        (DayState::Excluded, false) => label.bright_black().on_white().to_string(),
        (_, false) => label.bright_black().to_string(),
        (DayState::Past, true) => label.dimmed().to_string(),
        (DayState::Available, true) if cell.date == today => label.underline().to_string(),
        (DayState::Available, true) => label,
    }
}

/// Month title, weekday header and one line per week.
pub fn render_month(picker: &MultiDatePicker, today: NaiveDate) -> Vec<String> {
    let cursor = picker.cursor();
    let mut lines = Vec::new();

    let width = DAYS_OF_WEEK.len() * 4;
    lines.push(format!("{:^width$}", cursor.label()).bold().to_string());
    lines.push(
        DAYS_OF_WEEK
            .iter()
            .map(|d| format!("{:>3}", d))
            .collect::<Vec<_>>()
            .join(" ")
            .dimmed()
            .to_string(),
    );

    let grid = cursor.grid(today);
    for week in grid.chunks(7) {
        lines.push(
            week.iter()
                .map(|cell| render_cell(picker, cell, today))
                .collect::<Vec<_>>()
                .join(" "),
        );
    }

    lines
}

/// "Selected dates: ..." and "Excluded dates: ..."
pub fn render_summary(picker: &MultiDatePicker) -> Vec<String> {
    vec![
        format!(
            "{} {}",
            "Selected dates:".dimmed(),
            format_day_list(picker.selected_dates())
        ),
        format!(
            "{} {}",
            "Excluded dates:".dimmed(),
            format_day_list(picker.excluded_dates())
        ),
    ]
}
