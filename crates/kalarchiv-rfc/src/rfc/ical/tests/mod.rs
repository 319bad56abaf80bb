//! Document-level tests for the iCalendar parser and serializer.

mod fixtures;
