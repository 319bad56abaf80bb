//! iCalendar escaping for TEXT values and parameter values.

/// Escapes a TEXT value (RFC 5545 §3.3.11).
///
/// Backslash, comma and semicolon get a leading backslash; line breaks
/// (LF or CRLF) become `\n`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Encodes a parameter value (RFC 5545 §3.2, RFC 6868).
///
/// Caret, newline and double quote are caret-encoded. The value is quoted
/// when it contains `:`, `;` or `,`.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    let quote = s.contains([':', ';', ',', '"', '\n']);
    let mut out = String::with_capacity(s.len() + 2);
    if quote {
        out.push('"');
    }
    for c in s.chars() {
        match c {
            '^' => out.push_str("^^"),
            '\n' => out.push_str("^n"),
            '"' => out.push_str("^'"),
            _ => out.push(c),
        }
    }
    if quote {
        out.push('"');
    }
    out
}
