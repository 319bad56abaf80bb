//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Turns physical lines into logical content lines and splits each content
//! line into name, parameters and raw value.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{ContentLine, Parameter};

/// Splits input into logical content lines, merging folded continuations.
///
/// Returns `(line_number, content)` pairs where the number is the 1-based
/// physical line the content line starts on.
///
/// Accepts CRLF and bare LF endings. A line starting with SPACE or HTAB
/// continues the previous one with that single whitespace character removed.
/// Lines without any colon are treated as continuations too, since some
/// exporters fold without the leading whitespace. Blank lines and a leading
/// byte order mark are skipped.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (idx, raw_line) in input.split('\n').enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.is_empty() {
            continue;
        }

        let continuation = if let Some(rest) = line.strip_prefix([' ', '\t']) {
            Some(rest)
        } else if line.contains(':') {
            None
        } else {
            Some(line)
        };

        match (continuation, lines.last_mut()) {
            (Some(rest), Some((_, prev))) => prev.push_str(rest),
            (Some(rest), None) => lines.push((idx + 1, rest.to_string())),
            (None, _) => lines.push((idx + 1, line.to_string())),
        }
    }

    lines
}

/// Byte cursor over a single content line.
struct Cursor<'a> {
    line: &'a str,
    pos: usize,
    line_num: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str, line_num: usize) -> Self {
        Self {
            line,
            pos: 0,
            line_num,
        }
    }

    fn peek(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.line_num, self.pos + 1)
    }

    /// Consumes a run of name characters (`ALPHA / DIGIT / "-"`).
    fn take_name(&mut self) -> &'a str {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            self.pos += 1;
        }
        &self.line[start..self.pos]
    }
}

/// Parses a single unfolded content line.
///
/// Format: `name *(";" param) ":" value`
///
/// ## Errors
/// Returns an error if the name is missing or malformed, a parameter is
/// malformed, a quoted parameter value is not closed, or there is no colon.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let mut cursor = Cursor::new(line, line_num);

    let name = cursor.take_name();
    match cursor.peek() {
        _ if name.is_empty() => return Err(cursor.error(ParseErrorKind::MissingPropertyName)),
        Some(';' | ':') => {}
        Some(c) => {
            return Err(cursor
                .error(ParseErrorKind::InvalidPropertyName)
                .with_context(format!("unexpected character '{c}'")));
        }
        None => return Err(cursor.error(ParseErrorKind::MissingColon)),
    }

    let mut params = Vec::new();
    while cursor.peek() == Some(';') {
        cursor.bump();
        params.push(parse_parameter(&mut cursor)?);
    }

    match cursor.bump() {
        Some(':') => {}
        Some(_) => return Err(cursor.error(ParseErrorKind::InvalidParameter)),
        None => return Err(cursor.error(ParseErrorKind::MissingColon)),
    }

    Ok(ContentLine {
        name: name.to_ascii_uppercase(),
        params,
        raw_value: cursor.rest().to_string(),
    })
}

/// Parses `name "=" value *("," value)`, leaving the cursor on the
/// terminating `;` or `:`.
fn parse_parameter(cursor: &mut Cursor<'_>) -> ParseResult<Parameter> {
    let name = cursor.take_name();
    if name.is_empty() || cursor.bump() != Some('=') {
        return Err(cursor.error(ParseErrorKind::InvalidParameter));
    }

    let mut values = vec![parse_param_value(cursor)?];
    loop {
        match cursor.peek() {
            Some(',') => {
                cursor.bump();
                values.push(parse_param_value(cursor)?);
            }
            Some(';' | ':') => return Ok(Parameter::with_values(name, values)),
            Some(c) => {
                return Err(cursor
                    .error(ParseErrorKind::InvalidParameter)
                    .with_context(format!("unexpected character '{c}'")));
            }
            None => return Err(cursor.error(ParseErrorKind::MissingColon)),
        }
    }
}

/// Parses one parameter value, quoted or not, and decodes RFC 6868 carets.
fn parse_param_value(cursor: &mut Cursor<'_>) -> ParseResult<String> {
    if cursor.peek() == Some('"') {
        let open = cursor.error(ParseErrorKind::UnclosedQuote);
        cursor.bump();
        let start = cursor.pos;
        let Some(len) = cursor.rest().find('"') else {
            return Err(open);
        };
        cursor.pos += len + 1;
        return Ok(decode_caret(&cursor.line[start..start + len]));
    }

    let start = cursor.pos;
    let len = cursor.rest().find([',', ';', ':']).unwrap_or(cursor.rest().len());
    cursor.pos += len;
    Ok(decode_caret(&cursor.line[start..start + len]))
}

/// Decodes `^^`, `^n` and `^'`. Any other caret is kept literally.
fn decode_caret(raw: &str) -> String {
    if !raw.contains('^') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '^' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('^') => out.push('^'),
            Some('n' | 'N') => out.push('\n'),
            Some('\'') => out.push('"'),
            _ => {
                out.push('^');
                continue;
            }
        }
        chars.next();
    }
    out
}
