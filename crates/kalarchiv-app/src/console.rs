//! Interactive prompts.
//!
//! Written against `BufRead`/`Write` so the prompts can be driven from
//! in-memory buffers. End of input counts as an empty answer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use kalarchiv_core::constants::FILTER_DATE_FORMAT;

use crate::error::AppResult;
use crate::instant::parse_filter_date;

pub const MALFORMED_DATE_MESSAGE: &str = "Ungültiges Datum. Bitte im Format yyyy-mm-dd eingeben.";
pub const ABORT_MESSAGE: &str = "Abbruch durch Benutzer.";

/// Prompt reader and writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the writer, e.g. to inspect what was printed.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of text.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn say(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Shows `question` and reads one line. Returns the trimmed answer, or
    /// `None` at end of input.
    fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            // Keep the next output off the prompt line.
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    /// Asks for the calendar file; an empty answer selects `default`.
    ///
    /// ## Errors
    /// Returns an error if the console cannot be read or written.
    pub fn ask_input_path(&mut self, default: &Path) -> AppResult<PathBuf> {
        let question = format!(
            "Bitte Pfad zur Kalenderdatei (.ics) eingeben [Standard: {}]: ",
            default.display()
        );
        Ok(match self.ask(&question)? {
            Some(answer) if !answer.is_empty() => PathBuf::from(answer),
            _ => default.to_path_buf(),
        })
    }

    /// Asks for the filter date until a valid one is given; an empty answer
    /// selects `default`.
    ///
    /// ## Errors
    /// Returns an error if the console cannot be read or written.
    pub fn ask_filter_date(&mut self, default: NaiveDate) -> AppResult<NaiveDate> {
        let question = format!(
            "Bitte Filterdatum eingeben (yyyy-mm-dd) [Standard: {}]: ",
            default.format(FILTER_DATE_FORMAT)
        );
        loop {
            let answer = match self.ask(&question)? {
                Some(answer) if !answer.is_empty() => answer,
                _ => return Ok(default),
            };
            match parse_filter_date(&answer) {
                Ok(date) => return Ok(date),
                Err(_) => self.say(MALFORMED_DATE_MESSAGE)?,
            }
        }
    }

    /// Asks whether an existing file may be overwritten. Only `j` (any case)
    /// confirms.
    ///
    /// ## Errors
    /// Returns an error if the console cannot be read or written.
    pub fn confirm_overwrite(&mut self, path: &Path) -> AppResult<bool> {
        let question = format!(
            "Die Datei '{}' existiert bereits. Überschreiben? (j/N): ",
            path.display()
        );
        let confirmed = self
            .ask(&question)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("j"));
        tracing::debug!(path = %path.display(), confirmed, "Overwrite prompt answered");
        Ok(confirmed)
    }
}
