//! Archival rules for calendar entries.
//!
//! Rules are checked in order, first match wins:
//! 1. completed task
//! 2. event series whose UNTIL lies before the cutoff
//! 3. non-recurring event starting before the cutoff
//!
//! Everything else stays active. All comparisons are strict.

use std::fmt;

use kalarchiv_rfc::rfc::ical::core::names;
use kalarchiv_rfc::rfc::ical::{Component, ComponentKind, Property};

use crate::instant::{NormalizedInstant, normalize};

/// Why an entry was archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveReason {
    /// Task with a COMPLETED time or `STATUS:COMPLETED`.
    CompletedTask,
    /// Recurring event whose UNTIL bound lies before the cutoff.
    SeriesExpired,
    /// Non-recurring event starting before the cutoff.
    SinglePast,
}

impl ArchiveReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompletedTask => "completed_task",
            Self::SeriesExpired => "series_expired",
            Self::SinglePast => "single_past",
        }
    }
}

impl fmt::Display for ArchiveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Neither VEVENT nor VTODO.
    Ignored,
    /// Stays in the active calendar.
    Active,
    /// Moves to the archive for the given reason.
    Archive(ArchiveReason),
}

impl Decision {
    #[must_use]
    pub const fn is_relevant(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// The date fields of a component the rules look at, normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentDates {
    pub dtstart: Option<NormalizedInstant>,
    pub due: Option<NormalizedInstant>,
    pub completed: Option<NormalizedInstant>,
    /// Whether an RRULE property is present at all.
    pub has_rrule: bool,
    /// UNTIL of the first RRULE, if bounded.
    pub until: Option<NormalizedInstant>,
    /// `STATUS:COMPLETED` (case-insensitive).
    pub status_completed: bool,
}

impl ComponentDates {
    /// Reads and normalizes the relevant fields of a component.
    #[must_use]
    pub fn extract(component: &Component) -> Self {
        let instant_of = |name: &str| {
            component
                .get_property(name)
                .and_then(Property::as_date_or_datetime)
                .and_then(|value| normalize(&value))
        };

        let rrule = component.get_property(names::RRULE);
        let until = rrule
            .and_then(Property::as_recur)
            .and_then(|rule| rule.until.as_ref())
            .and_then(normalize);

        let status_completed = component
            .get_property(names::STATUS)
            .and_then(Property::as_text)
            .is_some_and(|status| status.trim().eq_ignore_ascii_case("COMPLETED"));

        Self {
            dtstart: instant_of(names::DTSTART),
            due: instant_of(names::DUE),
            completed: instant_of(names::COMPLETED),
            has_rrule: rrule.is_some(),
            until,
            status_completed,
        }
    }
}

/// Applies the archival rules to one component.
#[must_use]
pub fn classify(component: &Component, filter: NormalizedInstant) -> Decision {
    let decision = match component.kind {
        ComponentKind::Event | ComponentKind::Todo => {
            decide(component.kind, &ComponentDates::extract(component), filter)
        }
        _ => Decision::Ignored,
    };

    tracing::debug!(
        kind = %component.kind,
        uid = component.uid().unwrap_or("-"),
        ?decision,
        "Classified component"
    );
    decision
}

/// The rule table, separated from field extraction.
#[must_use]
pub fn decide(kind: ComponentKind, dates: &ComponentDates, filter: NormalizedInstant) -> Decision {
    let is_event = kind == ComponentKind::Event;
    let is_todo = kind == ComponentKind::Todo;
    if !is_event && !is_todo {
        return Decision::Ignored;
    }

    if is_todo && (dates.completed.is_some() || dates.status_completed) {
        return Decision::Archive(ArchiveReason::CompletedTask);
    }

    if is_event && dates.has_rrule && dates.until.is_some_and(|until| until < filter) {
        return Decision::Archive(ArchiveReason::SeriesExpired);
    }

    if is_event && !dates.has_rrule && dates.dtstart.is_some_and(|start| start < filter) {
        return Decision::Archive(ArchiveReason::SinglePast);
    }

    Decision::Active
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
