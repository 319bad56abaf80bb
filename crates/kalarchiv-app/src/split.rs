//! Routes the source's components into the active and archive documents.

use kalarchiv_rfc::rfc::ical::{ComponentKind, ICalendar};

use crate::classify::{Decision, classify};
use crate::instant::NormalizedInstant;
use crate::loader::LoadedCalendar;
use crate::stats::Statistics;

/// Result of a split: both output documents and the counters.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub active: ICalendar,
    pub archive: ICalendar,
    pub stats: Statistics,
}

/// Classifies every top-level component and moves it into the output its
/// decision names. Ignored components are dropped.
///
/// With `keep_timezones`, each top-level VTIMEZONE is copied into both
/// outputs ahead of the routed components.
#[must_use]
pub fn split(
    loaded: LoadedCalendar,
    filter: NormalizedInstant,
    keep_timezones: bool,
) -> SplitOutcome {
    let LoadedCalendar {
        source,
        mut active,
        mut archive,
    } = loaded;

    let mut stats = Statistics::new(source.root.walk().count());

    if keep_timezones {
        for tz in source.timezones() {
            active.add_component(tz.clone());
            archive.add_component(tz.clone());
        }
    }

    for component in source.root.children {
        let kind = component.kind;
        let decision = classify(&component, filter);
        stats.record(kind, decision);

        match decision {
            Decision::Ignored => {
                if kind != ComponentKind::Timezone {
                    tracing::debug!(name = %component.name, "Dropping non-relevant component");
                }
            }
            Decision::Active => active.add_component(component),
            Decision::Archive(_) => archive.add_component(component),
        }
    }

    tracing::info!(
        active = stats.active_total,
        archived = stats.archived_total,
        relevant = stats.source_relevant,
        "Calendar split"
    );

    SplitOutcome {
        active,
        archive,
        stats,
    }
}
