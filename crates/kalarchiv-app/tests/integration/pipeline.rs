#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Tests for a complete run.
//!
//! Verifies the written files, the console transcript and the abort paths.

use std::fs;

use kalarchiv_app::error::AppError;
use kalarchiv_app::pipeline::run;
use kalarchiv_rfc::rfc::ical::ParseErrorKind;

use super::helpers::{MIXED, Workspace, console, printed};

const OUTPUTS: [&str; 3] = ["Kalender_aktiv.ics", "Kalender_archiv.ics", "Kalender.log"];

#[test_log::test]
fn run_writes_all_outputs_and_counts() {
    let ws = Workspace::with_source(MIXED);
    let mut c = console("");

    let summary = run(&ws.options(false), &mut c).unwrap();

    let stats = summary.stats;
    assert_eq!(stats.source_components_total, 12);
    assert_eq!(stats.source_relevant, 7);
    assert_eq!((stats.events, stats.todos), (5, 2));
    assert_eq!(stats.archived_total, 3);
    assert_eq!(stats.archived_completed_todos, 1);
    assert_eq!(stats.archived_series_until, 1);
    assert_eq!(stats.archived_single_events, 1);
    assert_eq!(stats.active_total, 4);
    assert_eq!((stats.active_events, stats.active_todos), (3, 1));
    assert!(stats.is_consistent());

    for name in OUTPUTS {
        assert!(ws.file(name).is_file(), "{name} should be written");
    }
    assert_eq!(summary.paths.active, ws.file("Kalender_aktiv.ics"));
    assert_eq!(ws.read("Kalender.log"), summary.report);
}

#[test]
fn run_prints_report_then_confirmations() {
    let ws = Workspace::with_source(MIXED);
    let mut c = console("");

    let summary = run(&ws.options(false), &mut c).unwrap();
    let out = printed(c);

    assert!(out.starts_with(&summary.report));
    assert!(out.contains("  7 = 4 + 3 (OK)"));
    assert!(!out.contains("WARNUNG"));

    let tail: Vec<&str> = out.lines().rev().take(3).collect();
    assert_eq!(
        tail[0],
        format!("Archiv: {}", ws.file("Kalender_archiv.ics").display())
    );
    assert_eq!(
        tail[1],
        format!("Aktive Termine: {}", ws.file("Kalender_aktiv.ics").display())
    );
    assert!(tail[2].starts_with("Fertig. Logdatei: "));
    assert!(tail[2].ends_with("Kalender.log"));
}

#[test]
fn report_names_absolute_source() {
    let ws = Workspace::with_source(MIXED);
    let summary = run(&ws.options(false), &mut console("")).unwrap();

    let source_line = summary
        .report
        .lines()
        .find(|l| l.starts_with("Quelldatei: "))
        .expect("report names the source");
    assert!(source_line.ends_with("Kalender.ics"));
    assert!(ws.path().is_absolute());
    assert!(source_line.contains(&*ws.path().to_string_lossy()));
}

#[test]
fn declined_overwrite_leaves_files_untouched() {
    let ws = Workspace::with_source(MIXED);
    fs::write(ws.file("Kalender_archiv.ics"), "alt").unwrap();

    let mut c = console("n\n");
    let err = run(&ws.options(false), &mut c).unwrap_err();

    assert!(err.is_user_abort());
    assert!(!ws.file("Kalender_aktiv.ics").exists());
    assert!(!ws.file("Kalender.log").exists());
    assert_eq!(ws.read("Kalender_archiv.ics"), "alt");
    assert!(printed(c).contains("Überschreiben? (j/N)"));
}

#[test]
fn confirmed_overwrite_replaces_file() {
    let ws = Workspace::with_source(MIXED);
    fs::write(ws.file("Kalender.log"), "alt").unwrap();

    run(&ws.options(false), &mut console("j\n")).unwrap();

    assert!(ws.read("Kalender.log").contains("Statistik"));
}

#[test]
fn assume_yes_overwrites_without_prompt() {
    let ws = Workspace::with_source(MIXED);
    for name in OUTPUTS {
        fs::write(ws.file(name), "alt").unwrap();
    }

    let mut c = console("");
    run(&ws.options(true), &mut c).unwrap();

    assert!(ws.read("Kalender_aktiv.ics").starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ws.read("Kalender_archiv.ics").starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(!printed(c).contains("Überschreiben?"));
}

#[test]
fn malformed_source_writes_nothing() {
    let ws = Workspace::with_source("BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:x\r\n");

    let err = run(&ws.options(false), &mut console("")).unwrap_err();

    match err {
        AppError::Parse(e) => assert_eq!(e.kind, ParseErrorKind::MissingEnd),
        other => panic!("expected parse error, got {other:?}"),
    }
    for name in OUTPUTS {
        assert!(!ws.file(name).exists(), "{name} should not be written");
    }
}

#[test_log::test]
fn malformed_values_are_kept_and_do_not_stop_the_run() {
    let ws = Workspace::with_source(
        "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Kalarchiv Test//DE\r\n\
BEGIN:VEVENT\r\n\
UID:kein-tag\r\n\
DTSTART:20250230\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:kaputt\r\n\
DTSTART:20240101T090000Z\r\n\
PRIORITY:hoch\r\n\
ATTACH;ENCODING=BASE64;VALUE=BINARY:nicht*base64\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:vergangen\r\n\
DTSTART:20240301T100000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n",
    );

    let summary = run(&ws.options(false), &mut console("")).unwrap();

    assert_eq!(summary.stats.source_relevant, 3);
    assert_eq!(summary.stats.active_total, 1);
    assert_eq!(summary.stats.archived_single_events, 2);
    assert!(summary.stats.is_consistent());
    for name in OUTPUTS {
        assert!(ws.file(name).is_file(), "{name} should be written");
    }

    let active = ws.read("Kalender_aktiv.ics");
    assert!(active.contains("UID:kein-tag\r\nDTSTART:20250230\r\n"));

    let archive = ws.read("Kalender_archiv.ics");
    assert!(archive.contains("PRIORITY:hoch\r\n"));
    assert!(archive.contains("ATTACH;ENCODING=BASE64;VALUE=BINARY:nicht*base64\r\n"));
}

#[test]
fn failed_write_stops_before_report() {
    let ws = Workspace::with_source(MIXED);
    fs::create_dir(ws.file("Kalender_archiv.ics")).unwrap();

    let mut c = console("");
    let err = run(&ws.options(true), &mut c).unwrap_err();

    match err {
        AppError::Write { ref path, .. } => assert_eq!(*path, ws.file("Kalender_archiv.ics")),
        other => panic!("expected write error, got {other:?}"),
    }
    // Active is written first; nothing after the failed archive write is.
    assert!(ws.file("Kalender_aktiv.ics").is_file());
    assert!(!ws.file("Kalender.log").exists());
    assert!(printed(c).is_empty());
}

#[test]
fn missing_source_is_a_read_error() {
    let ws = Workspace::with_source(MIXED);
    let mut options = ws.options(false);
    options.input = ws.file("Fehlt.ics");

    let err = run(&options, &mut console("")).unwrap_err();

    assert!(matches!(err, AppError::Read { ref path, .. } if *path == options.input));
    assert!(!ws.file("Fehlt_aktiv.ics").exists());
}

#[test]
fn freebusy_only_calendar_keeps_metadata() {
    let ws = Workspace::with_source(
        "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Kalarchiv Test//DE\r\n\
BEGIN:VFREEBUSY\r\n\
UID:belegt\r\n\
END:VFREEBUSY\r\n\
END:VCALENDAR\r\n",
    );

    let summary = run(&ws.options(false), &mut console("")).unwrap();

    assert_eq!(summary.stats.source_components_total, 2);
    assert_eq!(summary.stats.source_relevant, 0);
    assert!(summary.stats.is_consistent());

    let expected = "BEGIN:VCALENDAR\r\n\
PRODID:-//Kalarchiv Test//DE\r\n\
VERSION:2.0\r\n\
END:VCALENDAR\r\n";
    assert_eq!(ws.read("Kalender_aktiv.ics"), expected);
    assert_eq!(ws.read("Kalender_archiv.ics"), expected);
}

#[test]
fn keep_timezones_writes_vtimezone_to_both() {
    let ws = Workspace::with_source(MIXED);
    let mut options = ws.options(false);
    options.keep_timezones = true;

    let summary = run(&options, &mut console("")).unwrap();

    assert_eq!(summary.stats.source_relevant, 7);
    for name in ["Kalender_aktiv.ics", "Kalender_archiv.ics"] {
        let text = ws.read(name);
        assert_eq!(text.matches("BEGIN:VTIMEZONE\r\n").count(), 1, "{name}");
        assert!(text.contains("TZID:Europe/Berlin\r\n"));
    }
}
