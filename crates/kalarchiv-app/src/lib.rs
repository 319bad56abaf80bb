//! Splits an iCalendar file into an active and an archive calendar.
//!
//! The pipeline reads the source once, classifies every top-level VEVENT and
//! VTODO against a cutoff date, routes each into one of two output
//! documents and writes both together with a statistics report.

pub mod classify;
pub mod cli;
pub mod console;
pub mod error;
pub mod instant;
pub mod loader;
pub mod paths;
pub mod pipeline;
pub mod report;
pub mod split;
pub mod stats;
pub mod writer;
