//! iCalendar core models (RFC 5545).
//!
//! Parsed values are kept next to their raw text so that a document can be
//! written back without losing anything the parser does not interpret.

mod component;
mod datetime;
mod parameter;
mod property;
mod rrule;
mod value;

pub use component::{Component, ComponentKind, ICalendar, Walk};
pub use datetime::{DateOrDateTime, DateTime, DateTimeForm};
pub use parameter::Parameter;
pub use property::{ContentLine, Property, names};
pub use rrule::RRule;
pub use value::{Date, Value};
