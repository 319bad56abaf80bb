//! iCalendar (RFC 5545) model, parser and serializer used by kalarchiv.

pub mod rfc;
