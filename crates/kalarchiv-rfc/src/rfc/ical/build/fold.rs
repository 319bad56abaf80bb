//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Maximum line length in octets, not counting the line break.
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line and terminates it with CRLF.
///
/// Every physical line is at most 75 octets; continuation lines start with
/// a single space that counts toward the limit. Breaks fall on character
/// boundaries only.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut out = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS + 1) * 3);
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;

    for c in line.chars() {
        let width = c.len_utf8();
        if used + width > budget {
            out.push_str("\r\n ");
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        out.push(c);
        used += width;
    }
    out.push_str("\r\n");
    out
}
