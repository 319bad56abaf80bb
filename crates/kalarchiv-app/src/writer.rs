//! Output files: overwrite protection, calendars and the report.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use kalarchiv_rfc::rfc::ical::{ICalendar, serialize};

use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::paths::OutputPaths;

/// Checks every target before anything is written. Each existing file needs
/// confirmation unless `assume_yes` is set.
///
/// ## Errors
/// Returns [`AppError::UserAborted`] on the first declined overwrite, or a
/// console error if the prompt fails.
pub fn ensure_writable<R: BufRead, W: Write>(
    paths: &OutputPaths,
    console: &mut Console<R, W>,
    assume_yes: bool,
) -> AppResult<()> {
    for path in paths.all() {
        if !path.exists() {
            continue;
        }
        if assume_yes {
            tracing::info!(path = %path.display(), "Overwriting existing file");
            continue;
        }
        if !console.confirm_overwrite(path)? {
            tracing::info!(path = %path.display(), "Overwrite declined");
            return Err(AppError::UserAborted);
        }
    }
    Ok(())
}

/// Serializes a calendar to `path`.
///
/// ## Errors
/// Returns [`AppError::Write`] if the file cannot be written.
pub fn write_calendar(path: &Path, ical: &ICalendar) -> AppResult<()> {
    write_file(path, serialize(ical).as_bytes())?;
    tracing::info!(
        path = %path.display(),
        components = ical.components().len(),
        "Calendar written"
    );
    Ok(())
}

/// Writes the report text as UTF-8.
///
/// ## Errors
/// Returns [`AppError::Write`] if the file cannot be written.
pub fn write_report(path: &Path, text: &str) -> AppResult<()> {
    write_file(path, text.as_bytes())?;
    tracing::info!(path = %path.display(), "Report written");
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> AppResult<()> {
    fs::write(path, contents).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}
