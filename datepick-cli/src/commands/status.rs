use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;

use crate::render::render_summary;
use crate::session::Session;

pub fn run(session: Session, as_json: bool) -> Result<()> {
    let picker = &session.picker;

    if as_json {
        let status = json!({
            "summary": picker.summary(),
            "field": &picker.options().field_name,
            "selected": picker.selected_dates(),
            "excluded": picker.excluded_dates(),
            "numberOfDays": session.number_of_days(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", picker.summary().bold());
    for line in render_summary(picker) {
        println!("{}", line);
    }
    if let Some(count) = session.number_of_days() {
        println!("{} {}", "Number of days:".dimmed(), count);
    }

    Ok(())
}
