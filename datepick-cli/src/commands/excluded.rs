use anyhow::Result;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: Session, as_json: bool) -> Result<()> {
    let excluded = session.picker.excluded_dates();

    if as_json {
        println!("{}", serde_json::to_string_pretty(excluded)?);
        return Ok(());
    }

    if excluded.is_empty() {
        println!("{}", "No excluded dates".dimmed());
        return Ok(());
    }

    for day in excluded {
        println!("{}", day.format("%a %Y-%m-%d"));
    }

    Ok(())
}
