//! Value type parsers for iCalendar (RFC 5545 §3.3).
//!
//! Each parser takes the position of the value on its content line so that
//! errors point at the offending text.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{Date, DateOrDateTime, DateTime, DateTimeForm, RRule};

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g., "19970714"). Only the shape is checked; whether
/// the day exists is left to [`Date::to_naive`].
///
/// ## Errors
/// Returns an error if the string is not 8 digits.
pub fn parse_date(s: &str, line: usize, col: usize) -> ParseResult<Date> {
    let err = || ParseError::new(ParseErrorKind::InvalidDate, line, col).with_context(s);
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }

    let year = s[0..4].parse::<u16>().ok().ok_or_else(err)?;
    let month = s[4..6].parse::<u8>().ok().ok_or_else(err)?;
    let day = s[6..8].parse::<u8>().ok().ok_or_else(err)?;

    Ok(Date::new(year, month, day))
}

/// Parses a TIME value (RFC 5545 §3.3.12) into `(hour, minute, second, utc)`.
fn parse_time(s: &str, line: usize, col: usize) -> ParseResult<(u8, u8, u8, bool)> {
    let err = || ParseError::new(ParseErrorKind::InvalidTime, line, col).with_context(s);
    let (digits, is_utc) = match s.strip_suffix(['Z', 'z']) {
        Some(stripped) => (stripped, true),
        None => (s, false),
    };
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }

    let hour = digits[0..2].parse::<u8>().ok().ok_or_else(err)?;
    let minute = digits[2..4].parse::<u8>().ok().ok_or_else(err)?;
    let second = digits[4..6].parse::<u8>().ok().ok_or_else(err)?;

    // 60 is a leap second
    if hour > 23 || minute > 59 || second > 60 {
        return Err(err());
    }
    Ok((hour, minute, second, is_utc))
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5).
///
/// Format: YYYYMMDD"T"HHMMSS[Z]. A trailing `Z` makes the value UTC and wins
/// over any TZID; otherwise a TZID makes it zoned and its absence floating.
///
/// ## Errors
/// Returns an error if the date or time part is malformed.
pub fn parse_datetime(
    s: &str,
    tzid: Option<&str>,
    line: usize,
    col: usize,
) -> ParseResult<DateTime> {
    let Some((date_part, time_part)) = s.split_once(['T', 't']) else {
        return Err(
            ParseError::new(ParseErrorKind::InvalidDateTime, line, col).with_context(s),
        );
    };

    let date = parse_date(date_part, line, col)?;
    let (hour, minute, second, is_utc) = parse_time(time_part, line, col + date_part.len() + 1)?;

    let form = match (is_utc, tzid) {
        (true, _) => DateTimeForm::Utc,
        (false, Some(tzid)) => DateTimeForm::Zoned {
            tzid: tzid.to_string(),
        },
        (false, None) => DateTimeForm::Floating,
    };

    Ok(DateTime {
        year: date.year,
        month: date.month,
        day: date.day,
        hour,
        minute,
        second,
        form,
    })
}

/// Parses a value that may be a DATE or a DATE-TIME.
///
/// `VALUE=DATE` forces a DATE. Without it, a bare 8-digit value is still read
/// as a DATE since exporters often omit the parameter.
///
/// ## Errors
/// Returns an error if the value is neither a valid DATE nor DATE-TIME.
pub fn parse_date_or_datetime(
    s: &str,
    value_type: Option<&str>,
    tzid: Option<&str>,
    line: usize,
    col: usize,
) -> ParseResult<DateOrDateTime> {
    let is_date = value_type.is_some_and(|v| v.eq_ignore_ascii_case("DATE"))
        || !s.contains(['T', 't']);
    if is_date {
        parse_date(s, line, col).map(DateOrDateTime::Date)
    } else {
        parse_datetime(s, tzid, line, col).map(DateOrDateTime::DateTime)
    }
}

/// Parses a RECUR value (RFC 5545 §3.3.10).
///
/// Only UNTIL is interpreted; every other part is kept verbatim in
/// [`RRule::other_parts`]. UNTIL and COUNT together are accepted.
///
/// ## Errors
/// Returns an error if a part has no `=` or UNTIL is malformed.
pub fn parse_rrule(s: &str, line: usize, col: usize) -> ParseResult<RRule> {
    let mut rrule = RRule::default();
    let mut offset = 0;

    for part in s.split(';') {
        let part_col = col + offset;
        offset += part.len() + 1;
        if part.is_empty() {
            continue;
        }

        let Some((key, value)) = part.split_once('=') else {
            return Err(
                ParseError::new(ParseErrorKind::InvalidRRule, line, part_col).with_context(part),
            );
        };

        let key = key.to_ascii_uppercase();
        if key == "UNTIL" {
            let value_col = part_col + key.len() + 1;
            rrule.until = Some(parse_date_or_datetime(value, None, None, line, value_col)?);
        } else {
            rrule.other_parts.push((key, value.to_string()));
        }
    }

    Ok(rrule)
}

/// Unescapes a TEXT value (RFC 5545 §3.3.11).
///
/// `\\`, `\;`, `\,` and `\n`/`\N` are decoded. Any other backslash is kept.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&escaped @ ('\\' | ';' | ',')) => out.push(escaped),
            Some('n' | 'N') => out.push('\n'),
            _ => {
                out.push('\\');
                continue;
            }
        }
        chars.next();
    }
    out
}
