//! iCalendar RFC 5545 support.
//!
//! - `core`: document, component, property and value types
//! - `parse`: text to [`ICalendar`]
//! - `build`: [`ICalendar`] to text
//!
//! ## Example
//!
//! ```rust
//! use kalarchiv_rfc::rfc::ical::{Component, ICalendar, Property, parse, serialize};
//!
//! let mut ical = ICalendar::new("-//Example//EN");
//! let mut todo = Component::todo();
//! todo.add_property(Property::text("UID", "todo-1"));
//! todo.add_property(Property::text("STATUS", "COMPLETED"));
//! ical.add_component(todo);
//!
//! let text = serialize(&ical);
//! let reparsed = parse(&text).unwrap();
//! assert_eq!(reparsed.todos().len(), 1);
//! ```

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::serialize;
pub use core::{Component, ComponentKind, DateOrDateTime, ICalendar, Parameter, Property, Value};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_bytes};
