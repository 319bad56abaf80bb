//! Normalization of DATE and DATE-TIME values to comparable instants.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use kalarchiv_core::constants::FILTER_DATE_FORMAT;
use kalarchiv_rfc::rfc::ical::DateOrDateTime;
use kalarchiv_rfc::rfc::ical::core::DateTimeForm;

use crate::error::{AppError, AppResult};

/// A point in time that always carries an explicit UTC offset.
pub type NormalizedInstant = DateTime<FixedOffset>;

/// Normalizes a DATE or DATE-TIME value.
///
/// - DATE: midnight UTC of that day
/// - floating DATE-TIME: read as UTC
/// - UTC DATE-TIME: unchanged
/// - zoned DATE-TIME: resolved through the IANA database; unknown zones and
///   nonexistent local times fall back to UTC, ambiguous ones take the
///   earlier instant
///
/// Returns `None` when the value does not name a real calendar day.
#[must_use]
pub fn normalize(value: &DateOrDateTime) -> Option<NormalizedInstant> {
    match value {
        DateOrDateTime::Date(date) => {
            let Some(naive) = date.to_naive() else {
                tracing::warn!(value = %date, "Date out of calendar range, ignoring");
                return None;
            };
            Some(midnight_utc(naive))
        }
        DateOrDateTime::DateTime(dt) => {
            let Some(naive) = dt.to_naive() else {
                tracing::warn!(value = %dt, "Date-time out of calendar range, ignoring");
                return None;
            };
            Some(match &dt.form {
                DateTimeForm::Floating | DateTimeForm::Utc => as_utc(naive),
                DateTimeForm::Zoned { tzid } => resolve_zoned(naive, tzid),
            })
        }
    }
}

fn as_utc(naive: NaiveDateTime) -> NormalizedInstant {
    naive.and_utc().fixed_offset()
}

fn midnight_utc(date: NaiveDate) -> NormalizedInstant {
    as_utc(date.and_time(NaiveTime::MIN))
}

fn resolve_zoned(naive: NaiveDateTime, tzid: &str) -> NormalizedInstant {
    let Ok(tz) = tzid.parse::<Tz>() else {
        tracing::warn!(tzid, "Unknown timezone, reading local time as UTC");
        return as_utc(naive);
    };

    // Ambiguous local times (DST fall-back) resolve to the earlier instant.
    match tz.from_local_datetime(&naive).earliest() {
        Some(local) => local.fixed_offset(),
        None => {
            tracing::warn!(tzid, %naive, "Nonexistent local time, reading as UTC");
            as_utc(naive)
        }
    }
}

/// Parses a filter date in `yyyy-mm-dd` form.
///
/// ## Errors
/// Returns [`AppError::MalformedDate`] if the text is not a valid date.
pub fn parse_filter_date(input: &str) -> AppResult<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, FILTER_DATE_FORMAT).map_err(|e| {
        tracing::debug!(input = trimmed, error = %e, "Rejected filter date");
        AppError::MalformedDate(trimmed.to_string())
    })
}

/// Returns the cutoff instant for a filter date: midnight UTC.
#[must_use]
pub fn filter_instant(date: NaiveDate) -> NormalizedInstant {
    midnight_utc(date)
}
