use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::{render_month, render_summary};
use crate::session::Session;

pub fn run(session: Session) -> Result<()> {
    for line in render_month(&session.picker, session.today) {
        println!("{}", line);
    }

    println!();
    println!("{}", session.picker.summary().bold());
    for line in render_summary(&session.picker) {
        println!("{}", line);
    }

    Ok(())
}
