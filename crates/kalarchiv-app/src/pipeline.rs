//! One archive run: resolve options, check targets, split, write.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use kalarchiv_core::config::Settings;
use kalarchiv_core::error::CoreError;

use crate::cli::Cli;
use crate::console::Console;
use crate::error::AppResult;
use crate::instant::filter_instant;
use crate::loader::{load, read_source};
use crate::paths::OutputPaths;
use crate::report::{CONSISTENCY_WARNING, render};
use crate::split::split;
use crate::stats::Statistics;
use crate::writer::{ensure_writable, write_calendar, write_report};

/// Fully resolved inputs of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub filter_date: NaiveDate,
    pub output_dir: PathBuf,
    pub assume_yes: bool,
    pub keep_timezones: bool,
}

impl RunOptions {
    /// Merges arguments over settings. The input path and filter date are
    /// prompted for only when neither was given on the command line.
    ///
    /// ## Errors
    /// Returns [`CoreError::ConfigError`] if the output directory does not
    /// exist, or a console error if a prompt fails.
    pub fn resolve<R: BufRead, W: Write>(
        cli: &Cli,
        settings: &Settings,
        console: &mut Console<R, W>,
    ) -> AppResult<Self> {
        let output_dir = cli
            .output_dir
            .clone()
            .unwrap_or_else(|| settings.archive.output_dir());
        if !output_dir.is_dir() {
            return Err(CoreError::ConfigError(format!(
                "Ausgabeverzeichnis '{}' existiert nicht",
                output_dir.display()
            ))
            .into());
        }

        let input = match &cli.input {
            Some(path) => path.clone(),
            None => console.ask_input_path(&settings.archive.default_input)?,
        };
        let filter_date = match cli.filter_date {
            Some(date) => date,
            None => console.ask_filter_date(settings.archive.default_filter_date)?,
        };

        Ok(Self {
            input,
            filter_date,
            output_dir,
            assume_yes: cli.yes,
            keep_timezones: cli.keep_timezones || settings.archive.keep_timezones,
        })
    }
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub paths: OutputPaths,
    pub stats: Statistics,
    pub report: String,
}

/// Runs the archive split end to end.
///
/// Existing targets are confirmed before the source is read, so an abort
/// leaves the file system untouched. Outputs are written in the order
/// active, archive, log; a failed write stops the run.
///
/// ## Errors
/// Returns [`crate::error::AppError::UserAborted`] when an overwrite is
/// declined, a parse error for malformed input, or a read/write error
/// naming the affected file.
#[tracing::instrument(skip(console), fields(input = %options.input.display()))]
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    console: &mut Console<R, W>,
) -> AppResult<RunSummary> {
    let paths = OutputPaths::derive(&options.input, &options.output_dir)?;
    ensure_writable(&paths, console, options.assume_yes)?;

    let bytes = read_source(&options.input)?;
    let loaded = load(&bytes)?;
    tracing::info!(bytes = bytes.len(), "Source calendar parsed");

    let outcome = split(
        loaded,
        filter_instant(options.filter_date),
        options.keep_timezones,
    );

    write_calendar(&paths.active, &outcome.active)?;
    write_calendar(&paths.archive, &outcome.archive)?;

    let report = render(
        &outcome.stats,
        &absolute(&options.input),
        options.filter_date,
    );
    console.say(&report)?;
    if !outcome.stats.is_consistent() {
        tracing::warn!(stats = ?outcome.stats, "Relevant count does not match outputs");
        console.say(CONSISTENCY_WARNING)?;
    }

    write_report(&paths.log, &report)?;

    console.say(&format!(
        "Fertig. Logdatei: {}",
        absolute(&paths.log).display()
    ))?;
    console.say(&format!("Aktive Termine: {}", paths.active.display()))?;
    console.say(&format!("Archiv: {}", paths.archive.display()))?;

    Ok(RunSummary {
        paths,
        stats: outcome.stats,
        report,
    })
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
