#![allow(clippy::expect_used)]
//! Test helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use kalarchiv_app::console::Console;
use kalarchiv_app::pipeline::RunOptions;
use tempfile::TempDir;

/// Calendar exercising every routing rule, filtered against 2025-06-01.
///
/// Relevant: 7 (5 events, 2 todos). Archive: 3. Active: 4.
/// Total components: 12 (VCALENDAR, VTIMEZONE, STANDARD, 5 VEVENT, one
/// VALARM, 2 VTODO, VFREEBUSY).
pub const MIXED: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Kalarchiv Test//DE\r\n\
CALSCALE:GREGORIAN\r\n\
X-WR-CALNAME:Familie\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Berlin\r\n\
BEGIN:STANDARD\r\n\
DTSTART:19701025T030000\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
UID:serie-abgelaufen\r\n\
DTSTART;TZID=Europe/Berlin:20230105T180000\r\n\
RRULE:FREQ=WEEKLY;UNTIL=20240101T000000Z\r\n\
SUMMARY:Chorprobe\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:serie-offen\r\n\
DTSTART:19990101T090000Z\r\n\
RRULE:FREQ=YEARLY\r\n\
SUMMARY:Neujahr\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:einzel-vergangen\r\n\
DTSTART;VALUE=DATE:20240312\r\n\
SUMMARY:Zahnarzt\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:einzel-stichtag\r\n\
DTSTART:20250601T000000Z\r\n\
SUMMARY:Stichtag\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT15M\r\n\
DESCRIPTION:Erinnerung\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:einzel-zukunft\r\n\
DTSTART;TZID=Europe/Berlin:20260214T193000\r\n\
SUMMARY:Konzert\\, Oper\r\n\
END:VEVENT\r\n\
BEGIN:VTODO\r\n\
UID:aufgabe-erledigt\r\n\
STATUS:COMPLETED\r\n\
SUMMARY:Steuer\r\n\
END:VTODO\r\n\
BEGIN:VTODO\r\n\
UID:aufgabe-offen\r\n\
DUE;VALUE=DATE:20200101\r\n\
SUMMARY:Keller\r\n\
END:VTODO\r\n\
BEGIN:VFREEBUSY\r\n\
UID:belegt\r\n\
FREEBUSY:20250101T080000Z/20250101T170000Z\r\n\
END:VFREEBUSY\r\n\
END:VCALENDAR\r\n";

/// A scratch directory holding one source calendar.
pub struct Workspace {
    dir: TempDir,
    pub input: PathBuf,
}

impl Workspace {
    /// Creates a directory with `Kalender.ics` containing `source`.
    pub fn with_source(source: &str) -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let input = dir.path().join("Kalender.ics");
        fs::write(&input, source).expect("source should be written");
        Self { dir, input }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).expect("output should exist")
    }

    /// Options for a run on the source, writing next to it.
    pub fn options(&self, assume_yes: bool) -> RunOptions {
        RunOptions {
            input: self.input.clone(),
            filter_date: filter_date(),
            output_dir: self.dir.path().to_path_buf(),
            assume_yes,
            keep_timezones: false,
        }
    }
}

pub fn filter_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

/// Console fed with `answers`, printing into a buffer.
pub fn console(answers: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(answers.as_bytes(), Vec::new())
}

pub fn printed(console: Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).expect("console output is UTF-8")
}
