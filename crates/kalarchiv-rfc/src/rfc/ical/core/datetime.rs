//! iCalendar DATE-TIME value type (RFC 5545 §3.3.5).

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use super::Date;

/// The three mutually exclusive forms of a DATE-TIME.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeForm {
    /// Wall-clock time without a zone, e.g. `19980118T230000`.
    Floating,
    /// Absolute UTC time, e.g. `19980119T070000Z`.
    Utc,
    /// Local time in the zone named by the TZID parameter.
    Zoned { tzid: String },
}

/// DATE-TIME value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// Second (0-60, allowing for leap seconds).
    pub second: u8,
    pub form: DateTimeForm,
}

impl DateTime {
    #[must_use]
    pub fn floating(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            form: DateTimeForm::Floating,
        }
    }

    #[must_use]
    pub fn utc(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            form: DateTimeForm::Utc,
            ..Self::floating(year, month, day, hour, minute, second)
        }
    }

    #[must_use]
    pub fn zoned(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        tzid: impl Into<String>,
    ) -> Self {
        Self {
            form: DateTimeForm::Zoned { tzid: tzid.into() },
            ..Self::floating(year, month, day, hour, minute, second)
        }
    }

    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.form, DateTimeForm::Utc)
    }

    #[must_use]
    pub fn is_floating(&self) -> bool {
        matches!(self.form, DateTimeForm::Floating)
    }

    /// Returns the timezone ID if this is a zoned time.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.form {
            DateTimeForm::Zoned { tzid } => Some(tzid),
            DateTimeForm::Floating | DateTimeForm::Utc => None,
        }
    }

    /// Returns the calendar date part.
    #[must_use]
    pub const fn date(&self) -> Date {
        Date::new(self.year, self.month, self.day)
    }

    /// Converts the wall-clock fields to a chrono value, ignoring the form.
    ///
    /// A leap second is clamped to second 59. Returns `None` when the fields
    /// do not name a real date and time.
    #[must_use]
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let date: NaiveDate = self.date().to_naive()?;
        date.and_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second.min(59)),
        )
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}T{:02}{:02}{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.is_utc() {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

/// A value that may be either a DATE or a DATE-TIME, as allowed for DTSTART,
/// DUE and the UNTIL part of a recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOrDateTime {
    Date(Date),
    DateTime(DateTime),
}

impl fmt::Display for DateOrDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}
