//! iCalendar serializer (RFC 5545).
//!
//! Properties and child components are written in the order they are stored,
//! which for parsed documents is source order.

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::rfc::ical::core::{Component, ICalendar, Parameter, Property, Value};

/// Serializes an iCalendar document with CRLF line endings.
#[must_use]
pub fn serialize(ical: &ICalendar) -> String {
    let mut out = String::new();
    write_component(&mut out, &ical.root);
    out
}

fn write_component(out: &mut String, component: &Component) {
    out.push_str(&fold_line(&format!("BEGIN:{}", component.name)));
    for prop in &component.properties {
        out.push_str(&serialize_property(prop));
    }
    for child in &component.children {
        write_component(out, child);
    }
    out.push_str(&fold_line(&format!("END:{}", component.name)));
}

/// Serializes a property as a folded, CRLF-terminated content line.
fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();
    for param in &prop.params {
        line.push(';');
        write_parameter(&mut line, param);
    }
    line.push(':');

    // TEXT is stored unescaped; every other value is written as read.
    match &prop.value {
        Value::Text(text) => line.push_str(&escape_text(text)),
        _ => line.push_str(&prop.raw_value),
    }

    fold_line(&line)
}

fn write_parameter(out: &mut String, param: &Parameter) {
    out.push_str(&param.name);
    out.push('=');
    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_param_value(value));
    }
}
