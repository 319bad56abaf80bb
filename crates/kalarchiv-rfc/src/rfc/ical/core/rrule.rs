//! iCalendar RECUR value type (RFC 5545 §3.3.10).
//!
//! Occurrences are never expanded here. Only the UNTIL bound is interpreted;
//! the remaining parts are kept verbatim.

use super::DateOrDateTime;

/// Recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RRule {
    /// Last possible occurrence (inclusive); DATE or DATE-TIME.
    pub until: Option<DateOrDateTime>,
    /// Every part except UNTIL as `(NAME, value)` in source order.
    pub other_parts: Vec<(String, String)>,
}
