//! iCalendar property and content line types (RFC 5545 §3.1, §3.8).

use super::{Date, DateOrDateTime, DateTime, Parameter, RRule, Value};

/// A content line split into name, parameters and raw value, before the
/// value type is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (uppercased).
    pub name: String,
    pub params: Vec<Parameter>,
    /// Value text after unfolding, still escaped.
    pub raw_value: String,
}

impl ContentLine {
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))?
            .value()
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.get_param_value(names::VALUE)
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value(names::TZID)
    }
}

/// A parsed iCalendar property.
///
/// `raw_value` keeps the text exactly as read so that values the parser
/// leaves untyped are written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name (uppercased).
    pub name: String,
    pub params: Vec<Parameter>,
    pub value: Value,
    pub raw_value: String,
}

impl Property {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let text = value.into();
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            raw_value: text.clone(),
            value: Value::Text(text),
        }
    }

    /// Creates a property with a DATE-TIME value. Zoned values carry their
    /// TZID parameter.
    #[must_use]
    pub fn datetime(name: impl Into<String>, dt: DateTime) -> Self {
        let params = dt.tzid().map(Parameter::tzid).into_iter().collect();
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            raw_value: dt.to_string(),
            value: Value::DateTime(dt),
        }
    }

    /// Creates a property with a DATE value (`VALUE=DATE`).
    #[must_use]
    pub fn date(name: impl Into<String>, date: Date) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: vec![Parameter::value_type("DATE")],
            raw_value: date.to_string(),
            value: Value::Date(date),
        }
    }

    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))?
            .value()
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    #[must_use]
    pub fn as_date_or_datetime(&self) -> Option<DateOrDateTime> {
        self.value.as_date_or_datetime()
    }

    #[must_use]
    pub fn as_recur(&self) -> Option<&RRule> {
        self.value.as_recur()
    }
}

/// Property and parameter names used by this crate and its callers.
pub mod names {
    // Calendar properties
    pub const CALSCALE: &str = "CALSCALE";
    pub const METHOD: &str = "METHOD";
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";

    // Descriptive properties
    pub const STATUS: &str = "STATUS";
    pub const SUMMARY: &str = "SUMMARY";
    pub const UID: &str = "UID";

    // Date and time properties
    pub const COMPLETED: &str = "COMPLETED";
    pub const DTSTART: &str = "DTSTART";
    pub const DUE: &str = "DUE";

    // Recurrence
    pub const RRULE: &str = "RRULE";

    // Parameters
    pub const TZID: &str = "TZID";
    pub const VALUE: &str = "VALUE";
}
