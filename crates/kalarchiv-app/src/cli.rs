//! Command-line arguments. Every value left out here is asked for
//! interactively.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::instant::parse_filter_date;

#[derive(Debug, Parser)]
#[command(name = "kalarchiv")]
#[command(
    author,
    version,
    about = "Teilt einen iCalendar-Kalender in aktive und archivierte Einträge"
)]
pub struct Cli {
    /// Calendar file (.ics); prompted for when omitted
    pub input: Option<PathBuf>,

    /// Cutoff date (yyyy-mm-dd); prompted for when omitted
    #[arg(long, short = 'd', value_parser = filter_date_arg)]
    pub filter_date: Option<NaiveDate>,

    /// Directory for the output files
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Overwrite existing output files without asking
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Copy VTIMEZONE definitions into both outputs
    #[arg(long)]
    pub keep_timezones: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

fn filter_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_filter_date(value).map_err(|e| e.to_string())
}
