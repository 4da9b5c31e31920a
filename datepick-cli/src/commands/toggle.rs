use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::{Render, render_summary};
use crate::session::Session;

pub fn run(mut session: Session, days: Vec<NaiveDate>) -> Result<()> {
    let mut changed = false;

    for day in days {
        let outcome = session.toggle(day);
        changed |= outcome.changed();
        println!("{}", outcome.render());
    }

    if changed {
        session.save()?;
    }

    println!();
    println!("{}", session.picker.summary().bold());
    for line in render_summary(&session.picker) {
        println!("{}", line);
    }

    Ok(())
}
