//! iCalendar DATE value and the typed property value enum (RFC 5545 §3.3).

use std::fmt;

use chrono::NaiveDate;

use super::{DateOrDateTime, DateTime, RRule};

/// DATE value (RFC 5545 §3.3.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns `None` when the fields do not name a real calendar day.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Parsed property value.
///
/// Only the value types this crate interprets get their own variant; the
/// raw text of every property is kept on [`super::Property`] regardless.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Date(Date),
    DateTime(DateTime),
    /// RECUR value (recurrence rule).
    Recur(Box<RRule>),
    /// TEXT value (unescaped).
    Text(String),
    /// Value left uninterpreted, or one that did not match its type.
    Unknown(String),
}

impl Value {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns DATE and DATE-TIME values under one type.
    #[must_use]
    pub fn as_date_or_datetime(&self) -> Option<DateOrDateTime> {
        match self {
            Self::Date(d) => Some(DateOrDateTime::Date(*d)),
            Self::DateTime(dt) => Some(DateOrDateTime::DateTime(dt.clone())),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_recur(&self) -> Option<&RRule> {
        match self {
            Self::Recur(r) => Some(r),
            _ => None,
        }
    }
}
