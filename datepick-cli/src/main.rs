mod commands;
mod dates;
mod logging;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use datepick_core::config::DatepickConfig;
use datepick_core::{MonthCursor, SystemClock};

use crate::session::Session;

#[derive(Parser)]
#[command(name = "datepick")]
#[command(about = "Pick multiple dates and keep track of the days skipped between them")]
struct Cli {
    /// Use this form state file instead of the configured one
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add or remove days from the selection
    Toggle {
        /// Days as YYYY-MM-DD or natural language ("tomorrow", "next fri")
        #[arg(required = true)]
        dates: Vec<String>,
    },
    /// Show a month with selected and excluded days highlighted
    Show {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Print the current selection
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Print the days skipped between selected days
    Excluded {
        #[arg(long)]
        json: bool,
    },
    /// Compute excluded days for the given days without saving anything
    Gaps {
        #[arg(required = true)]
        dates: Vec<String>,

        #[arg(long)]
        json: bool,
    },
    /// Clear the selection and every field derived from it
    Reset {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.debug)?;

    let config = DatepickConfig::load().context("Failed to load datepick config")?;
    let open = |month: Option<MonthCursor>| {
        Session::open(&config, cli.state.clone(), month, &SystemClock)
    };

    match cli.command {
        Commands::Toggle { dates } => {
            let days = dates::parse_all(&dates)?;
            commands::toggle::run(open(None)?, days)
        }
        Commands::Show { month } => {
            let month = month.as_deref().map(MonthCursor::parse).transpose()?;
            commands::show::run(open(month)?)
        }
        Commands::Status { json } => commands::status::run(open(None)?, json),
        Commands::Excluded { json } => commands::excluded::run(open(None)?, json),
        Commands::Gaps { dates, json } => {
            let days = dates::parse_all(&dates)?;
            commands::gaps::run(days, json)
        }
        Commands::Reset { yes } => commands::reset::run(open(None)?, yes),
    }
}
