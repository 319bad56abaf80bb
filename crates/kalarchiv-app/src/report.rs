//! Plain-text statistics report, printed and written to the log file.

use std::path::Path;

use chrono::NaiveDate;
use kalarchiv_core::constants::{FILTER_DATE_FORMAT, PROGRAM_NAME};

use crate::stats::Statistics;

/// Printed after the report when the counters do not add up.
pub const CONSISTENCY_WARNING: &str =
    "WARNUNG: Die Anzahl der relevanten Einträge stimmt nicht mit Aktiv+Archiv überein!";

/// Renders the report for one run.
///
/// `source` is shown as given; callers pass the absolute path.
#[must_use]
pub fn render(stats: &Statistics, source: &Path, filter_date: NaiveDate) -> String {
    let check = if stats.is_consistent() { "OK" } else { "FEHLER" };
    format!(
        "
{PROGRAM_NAME} Statistik
======================
Quelldatei: {source}
Filterdatum: {filter}
Gesamt-Komponenten           : {total}
Relevante Einträge (VEVENT/VTODO): {relevant}
  - Termine (VEVENT)         : {events}
  - Aufgaben (VTODO)         : {todos}

Archiviert gesamt            : {archived}
  - Abgeschlossene Aufgaben  : {archived_todos}
  - Serien mit UNTIL < Filter: {archived_series}
  - Einzeltermine < Filter   : {archived_single}

Aktiv gesamt                 : {active}
  - Aktive Termine           : {active_events}
  - Aktive Aufgaben          : {active_todos}

Kontrolle: Quelle_relevant = Aktiv + Archiv ?
  {relevant} = {active} + {archived} ({check})
",
        source = source.display(),
        filter = filter_date.format(FILTER_DATE_FORMAT),
        total = stats.source_components_total,
        relevant = stats.source_relevant,
        events = stats.events,
        todos = stats.todos,
        archived = stats.archived_total,
        archived_todos = stats.archived_completed_todos,
        archived_series = stats.archived_series_until,
        archived_single = stats.archived_single_events,
        active = stats.active_total,
        active_events = stats.active_events,
        active_todos = stats.active_todos,
    )
}
