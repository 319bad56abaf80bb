//! Counters accumulated while splitting a calendar.

use kalarchiv_rfc::rfc::ical::ComponentKind;

use crate::classify::{ArchiveReason, Decision};

/// Run statistics. Field names match the report lines they feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Every component of the source tree, root and nested ones included.
    pub source_components_total: usize,
    /// VEVENT and VTODO components.
    pub source_relevant: usize,
    pub events: usize,
    pub todos: usize,

    pub archived_total: usize,
    pub archived_completed_todos: usize,
    pub archived_series_until: usize,
    pub archived_single_events: usize,

    pub active_total: usize,
    pub active_events: usize,
    pub active_todos: usize,
}

impl Statistics {
    /// Starts a run over a source tree with the given number of components.
    #[must_use]
    pub fn new(source_components_total: usize) -> Self {
        Self {
            source_components_total,
            ..Self::default()
        }
    }

    /// Counts one classified top-level component.
    pub fn record(&mut self, kind: ComponentKind, decision: Decision) {
        if !decision.is_relevant() {
            return;
        }

        self.source_relevant += 1;
        match kind {
            ComponentKind::Event => self.events += 1,
            ComponentKind::Todo => self.todos += 1,
            _ => {}
        }

        match decision {
            Decision::Ignored => {}
            Decision::Active => {
                self.active_total += 1;
                match kind {
                    ComponentKind::Event => self.active_events += 1,
                    ComponentKind::Todo => self.active_todos += 1,
                    _ => {}
                }
            }
            Decision::Archive(reason) => {
                self.archived_total += 1;
                match reason {
                    ArchiveReason::CompletedTask => self.archived_completed_todos += 1,
                    ArchiveReason::SeriesExpired => self.archived_series_until += 1,
                    ArchiveReason::SinglePast => self.archived_single_events += 1,
                }
            }
        }
    }

    /// Returns whether every relevant component was routed exactly once.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.source_relevant == self.active_total + self.archived_total
    }
}
