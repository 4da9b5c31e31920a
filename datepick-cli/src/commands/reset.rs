use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(mut session: Session, yes: bool) -> Result<()> {
    let count = session.picker.selected_dates().len();

    if count > 0 && !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Clear {}?", session.picker.summary()))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Nothing changed".dimmed());
            return Ok(());
        }
    }

    session.cancel();
    session.save()?;

    println!("{}", "  Selection cleared".green());
    Ok(())
}
