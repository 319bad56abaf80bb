//! iCalendar parsing (RFC 5545).
//!
//! - Lexer: physical lines to content lines (unfolding, parameters)
//! - Values: DATE, DATE-TIME, RECUR and TEXT value parsers
//! - Parser: content lines to a component tree

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{parse_content_line, split_lines};
pub use parser::{parse, parse_bytes};
pub use values::{parse_date, parse_date_or_datetime, parse_datetime, parse_rrule, unescape_text};
