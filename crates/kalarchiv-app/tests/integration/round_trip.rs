#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Re-parses the written calendars and compares them with the statistics.

use chrono::Datelike;
use kalarchiv_app::pipeline::run;
use kalarchiv_rfc::rfc::ical::{Component, ComponentKind, ICalendar, Property, parse};

use super::helpers::{MIXED, Workspace, console, filter_date};

fn reparse(ws: &Workspace, name: &str) -> ICalendar {
    parse(&ws.read(name)).expect("written calendar should parse")
}

fn relevant(ical: &ICalendar) -> usize {
    ical.events().len() + ical.todos().len()
}

fn uids(ical: &ICalendar) -> Vec<&str> {
    ical.components()
        .iter()
        .filter_map(Component::uid)
        .collect()
}

#[test_log::test]
fn reparsed_counts_match_statistics() {
    let ws = Workspace::with_source(MIXED);
    let summary = run(&ws.options(false), &mut console("")).unwrap();

    let active = reparse(&ws, "Kalender_aktiv.ics");
    let archive = reparse(&ws, "Kalender_archiv.ics");

    assert_eq!(relevant(&active), summary.stats.active_total);
    assert_eq!(relevant(&archive), summary.stats.archived_total);
    assert_eq!(active.todos().len(), summary.stats.active_todos);
    assert_eq!(archive.todos().len(), summary.stats.archived_completed_todos);
}

#[test]
fn components_keep_source_order() {
    let ws = Workspace::with_source(MIXED);
    run(&ws.options(false), &mut console("")).unwrap();

    assert_eq!(
        uids(&reparse(&ws, "Kalender_aktiv.ics")),
        vec!["serie-offen", "einzel-stichtag", "einzel-zukunft", "aufgabe-offen"]
    );
    assert_eq!(
        uids(&reparse(&ws, "Kalender_archiv.ics")),
        vec!["serie-abgelaufen", "einzel-vergangen", "aufgabe-erledigt"]
    );
}

#[test]
fn metadata_is_copied_to_both_outputs() {
    let ws = Workspace::with_source(MIXED);
    run(&ws.options(false), &mut console("")).unwrap();

    for name in ["Kalender_aktiv.ics", "Kalender_archiv.ics"] {
        let ical = reparse(&ws, name);
        let props: Vec<&str> = ical
            .root
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(props, vec!["PRODID", "VERSION", "CALSCALE"], "{name}");
        assert_eq!(ical.prodid(), Some("-//Kalarchiv Test//DE"));
        assert!(ical.freebusy().is_empty());
        assert!(ical.timezones().is_empty());
    }
}

#[test]
fn content_survives_the_split() {
    let ws = Workspace::with_source(MIXED);
    run(&ws.options(false), &mut console("")).unwrap();

    let active_text = ws.read("Kalender_aktiv.ics");
    assert!(active_text.contains("SUMMARY:Konzert\\, Oper\r\n"));
    assert!(active_text.contains("DTSTART;TZID=Europe/Berlin:20260214T193000\r\n"));

    let active = reparse(&ws, "Kalender_aktiv.ics");
    let concert = active
        .components()
        .iter()
        .find(|c| c.uid() == Some("einzel-zukunft"))
        .expect("future event is active");
    assert_eq!(concert.summary(), Some("Konzert, Oper"));

    let deadline = active
        .components()
        .iter()
        .find(|c| c.uid() == Some("einzel-stichtag"))
        .expect("event on the filter date is active");
    let alarms = deadline.children_of_kind(ComponentKind::Alarm);
    assert_eq!(alarms.len(), 1);
    assert_eq!(
        alarms[0].get_property("DESCRIPTION").and_then(Property::as_text),
        Some("Erinnerung")
    );

    let archive = reparse(&ws, "Kalender_archiv.ics");
    let series = archive
        .components()
        .iter()
        .find(|c| c.uid() == Some("serie-abgelaufen"))
        .expect("expired series is archived");
    let rrule = series
        .get_property("RRULE")
        .and_then(Property::as_recur)
        .expect("RRULE survives");
    let until = rrule.until.as_ref().expect("UNTIL survives");
    assert!(until.to_string().starts_with("20240101"));
}

#[test]
fn active_output_can_be_split_again() {
    let ws = Workspace::with_source(MIXED);
    run(&ws.options(false), &mut console("")).unwrap();

    // A year later the dated single events of the active output expire.
    let second = Workspace::with_source(&ws.read("Kalender_aktiv.ics"));
    let mut options = second.options(false);
    options.filter_date = filter_date().with_year(2026).expect("valid date");
    let summary = run(&options, &mut console("")).unwrap();

    assert_eq!(summary.stats.source_relevant, 4);
    assert_eq!(summary.stats.archived_single_events, 2);
    assert_eq!(summary.stats.active_total, 2);
    assert_eq!(
        uids(&reparse(&second, "Kalender_aktiv.ics")),
        vec!["serie-offen", "aufgabe-offen"]
    );
}
