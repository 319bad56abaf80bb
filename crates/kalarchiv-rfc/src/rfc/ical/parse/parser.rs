//! iCalendar document parser (RFC 5545).
//!
//! Builds the component tree from content lines and resolves property values.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{parse_content_line, split_lines};
use super::values::{parse_date, parse_date_or_datetime, parse_datetime, parse_rrule, unescape_text};
use crate::rfc::ical::core::{
    Component, ComponentKind, ContentLine, DateOrDateTime, ICalendar, Property, Value,
};

/// A content line with the position of its value.
struct Located {
    line: usize,
    value_col: usize,
    content: ContentLine,
}

/// Parses an iCalendar document from UTF-8 bytes.
///
/// ## Errors
///
/// Returns [`ParseErrorKind::InvalidEncoding`] if the bytes are not UTF-8,
/// otherwise any error of [`parse`].
pub fn parse_bytes(input: &[u8]) -> ParseResult<ICalendar> {
    match std::str::from_utf8(input) {
        Ok(text) => parse(text),
        Err(e) => {
            let valid = &input[..e.valid_up_to()];
            let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
            let line_start = valid
                .iter()
                .rposition(|&b| b == b'\n')
                .map_or(0, |pos| pos + 1);
            Err(
                ParseError::new(ParseErrorKind::InvalidEncoding, line, valid.len() - line_start + 1)
                    .with_context(e.to_string()),
            )
        }
    }
}

/// Parses an iCalendar document from a string.
///
/// The document must be exactly one VCALENDAR. Properties and nested
/// components keep their source order.
///
/// ## Errors
///
/// Returns an error if the input is not valid iCalendar.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<ICalendar> {
    tracing::debug!("Parsing iCalendar document");

    let lines = split_lines(input);
    if lines.is_empty() {
        tracing::warn!("Empty iCalendar input");
        return Err(
            ParseError::new(ParseErrorKind::MissingBegin, 1, 1).with_context("empty input")
        );
    }

    let located = lines
        .iter()
        .map(|(line, text)| {
            parse_content_line(text, *line).map(|content| Located {
                line: *line,
                value_col: text.len() - content.raw_value.len() + 1,
                content,
            })
        })
        .collect::<ParseResult<Vec<_>>>()?;

    tracing::trace!(count = located.len(), "Parsed content lines");

    let mut iter = located.into_iter();
    let Some(first) = iter.next() else {
        return Err(ParseError::new(ParseErrorKind::MissingBegin, 1, 1));
    };
    if first.content.name != "BEGIN"
        || !first.content.raw_value.eq_ignore_ascii_case("VCALENDAR")
    {
        return Err(ParseError::new(ParseErrorKind::MissingBegin, first.line, 1)
            .with_context("expected BEGIN:VCALENDAR"));
    }

    let root = parse_component(&mut iter, first.line, "VCALENDAR")?;

    if let Some(extra) = iter.next() {
        return Err(
            ParseError::new(ParseErrorKind::TrailingContent, extra.line, 1)
                .with_context(extra.content.name),
        );
    }

    tracing::debug!(
        children = root.children.len(),
        "iCalendar document parsed successfully"
    );
    debug_assert_eq!(root.kind, ComponentKind::Calendar);

    Ok(ICalendar { root })
}

/// Parses the body of a component whose BEGIN line has been consumed,
/// up to and including its matching END line.
fn parse_component(
    iter: &mut impl Iterator<Item = Located>,
    begin_line: usize,
    name: &str,
) -> ParseResult<Component> {
    let mut component = Component::named(name);
    let mut last_line = begin_line;

    loop {
        let Some(next) = iter.next() else {
            return Err(ParseError::new(ParseErrorKind::MissingEnd, last_line, 1)
                .with_context(format!("missing END:{name}")));
        };
        last_line = next.line;

        match next.content.name.as_str() {
            "BEGIN" => {
                let nested = next.content.raw_value.to_ascii_uppercase();
                component
                    .children
                    .push(parse_component(iter, next.line, &nested)?);
            }
            "END" => {
                let end_name = next.content.raw_value.to_ascii_uppercase();
                if end_name != component.name {
                    return Err(
                        ParseError::new(ParseErrorKind::MismatchedComponent, next.line, 1)
                            .with_context(format!("expected END:{name}, got END:{end_name}")),
                    );
                }
                return Ok(component);
            }
            _ => component.properties.push(parse_property(next)),
        }
    }
}

/// Parses a property from a content line, resolving the value type.
///
/// A value that does not match its type is kept as raw text so it is
/// written back unchanged.
fn parse_property(located: Located) -> Property {
    let Located {
        line,
        value_col,
        content,
    } = located;
    let value = match parse_value(&content, ValueType::resolve(&content), line, value_col) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                property = %content.name,
                line,
                error = %e,
                "Malformed value kept as raw text"
            );
            Value::Unknown(content.raw_value.clone())
        }
    };

    Property {
        name: content.name,
        params: content.params,
        value,
        raw_value: content.raw_value,
    }
}

/// Value types the parser interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueType {
    Date,
    DateTime,
    /// DATE or DATE-TIME, inferred from the value's shape.
    DateOrDateTime,
    Recur,
    Text,
    /// Kept as raw text.
    Raw,
}

impl ValueType {
    fn resolve(cl: &ContentLine) -> Self {
        let declared = cl.value_type().map(str::to_ascii_uppercase);
        let by_name = Self::for_property(&cl.name);

        let resolved = match declared.as_deref() {
            Some("DATE") => Self::Date,
            Some("DATE-TIME") => Self::DateTime,
            Some("TEXT" | "RECUR") | None => by_name,
            Some(_) => Self::Raw,
        };

        // Date lists (e.g. several values in one DTSTART) are not interpreted.
        match resolved {
            Self::Date | Self::DateTime | Self::DateOrDateTime if cl.raw_value.contains(',') => {
                Self::Raw
            }
            other => other,
        }
    }

    fn for_property(name: &str) -> Self {
        match name {
            "DTSTART" | "DTEND" | "DUE" | "RECURRENCE-ID" | "DTSTAMP" | "CREATED"
            | "LAST-MODIFIED" | "COMPLETED" => Self::DateOrDateTime,

            "RRULE" | "EXRULE" => Self::Recur,

            // Single-valued TEXT properties; list-valued ones such as
            // CATEGORIES stay raw so their escaping survives a rewrite.
            "SUMMARY" | "DESCRIPTION" | "LOCATION" | "COMMENT" | "STATUS" | "CLASS" | "UID"
            | "PRODID" | "VERSION" | "CALSCALE" | "METHOD" | "TRANSP" | "TZID" | "TZNAME"
            | "CONTACT" | "ACTION" | "RELATED-TO" | "NAME" => Self::Text,

            _ => Self::Raw,
        }
    }
}

/// Parses a raw value string into a typed value.
fn parse_value(
    cl: &ContentLine,
    value_type: ValueType,
    line: usize,
    col: usize,
) -> ParseResult<Value> {
    let raw = cl.raw_value.as_str();
    Ok(match value_type {
        ValueType::Text => Value::Text(unescape_text(raw)),
        ValueType::Date => Value::Date(parse_date(raw, line, col)?),
        ValueType::DateTime => Value::DateTime(parse_datetime(raw, cl.tzid(), line, col)?),
        ValueType::DateOrDateTime => {
            match parse_date_or_datetime(raw, None, cl.tzid(), line, col)? {
                DateOrDateTime::Date(date) => Value::Date(date),
                DateOrDateTime::DateTime(dt) => Value::DateTime(dt),
            }
        }
        ValueType::Recur => Value::Recur(Box::new(parse_rrule(raw, line, col)?)),
        ValueType::Raw => Value::Unknown(raw.to_string()),
    })
}
