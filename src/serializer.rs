// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical CR-LF serialization of a [`Tag`] tree, per the fixed grammar: indentation, an
//! optional `namespace:name` prefix (suppressed for the anonymous `content` tag), values,
//! ascending-order attributes, and a `{ ... }` block for children.

use crate::keyword::CONTENT_TAG_NAME;
use crate::tag::Tag;
use crate::value::datetime::process_local_gmt_offset;
use crate::value::{binary, Value};

const INDENT: &str = "    ";

pub(crate) fn serialize_tag(tag: &Tag, indent: usize) -> String {
    let mut out = String::new();
    write_tag(&mut out, tag, indent);
    out
}

fn write_tag(out: &mut String, tag: &Tag, indent: usize) {
    out.push_str(&INDENT.repeat(indent));

    let suppress_name = tag.namespace().is_empty() && tag.name() == CONTENT_TAG_NAME;
    if !suppress_name {
        if !tag.namespace().is_empty() {
            out.push_str(tag.namespace());
            out.push(':');
        }
        out.push_str(tag.name());
    }

    for (i, value) in tag.values().iter().enumerate() {
        if i > 0 || !suppress_name {
            out.push(' ');
        }
        out.push_str(&format_value(value));
    }

    for (ns, name, value) in tag.attributes() {
        out.push(' ');
        if !ns.is_empty() {
            out.push_str(ns);
            out.push(':');
        }
        out.push_str(name);
        out.push('=');
        out.push_str(&format_value(value));
    }

    if !tag.children().is_empty() {
        out.push_str(" {\r\n");
        for child in tag.children() {
            write_tag(out, child, indent + 1);
            out.push_str("\r\n");
        }
        out.push_str(&INDENT.repeat(indent));
        out.push('}');
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Str(s) => format!("\"{}\"", escape_str(s)),
        Value::Char(c) => format!("'{}'", escape_char(*c)),
        Value::Int32(n) => n.to_string(),
        Value::Int64(n) => format!("{n}L"),
        Value::Float32(f) => format!("{f}F"),
        Value::Float64(f) => format_float64(*f),
        Value::Decimal(d) => format!("{d}BD"),
        Value::Binary(bytes) => format!("[{}]", binary::encode_binary(bytes)),
        Value::Date(date) => format!("{:04}/{:02}/{:02}", date.year, date.month, date.day),
        Value::DateTime(dt) => {
            let mut s = format!(
                "{:04}/{:02}/{:02} {:02}:{:02}",
                dt.date.year, dt.date.month, dt.date.day, dt.hour, dt.minute
            );
            if dt.second != 0 || dt.millis != 0 {
                s.push_str(&format!(":{:02}", dt.second));
            }
            if dt.millis != 0 {
                s.push_str(&format!(".{:03}", dt.millis));
            }
            s.push('-');
            match &dt.timezone {
                Some(tz) => s.push_str(tz),
                None => s.push_str(&process_local_gmt_offset()),
            }
            s
        }
        Value::TimeSpan(ts) => {
            let mut s = String::new();
            let mut sign_placed = false;
            let mut place_sign = |s: &mut String, placed: &mut bool| {
                if ts.negative && !*placed {
                    s.push('-');
                    *placed = true;
                }
            };
            if ts.days != 0 {
                place_sign(&mut s, &mut sign_placed);
                s.push_str(&format!("{}d:", ts.days));
            }
            place_sign(&mut s, &mut sign_placed);
            s.push_str(&format!("{:02}:{:02}:{:02}", ts.hours, ts.minutes, ts.seconds));
            if ts.millis != 0 {
                s.push_str(&format!(".{:03}", ts.millis));
            }
            s
        }
    }
}

/// Float64 is formatted with Rust's default shortest-round-trip representation, except a
/// value with no fractional part gets an explicit `.0` so it doesn't re-parse as an Int32.
fn format_float64(f: f64) -> String {
    let s = f.to_string();
    if s.contains('.') || s.contains('e') || s.contains('E') {
        s
    } else {
        format!("{s}.0")
    }
}

fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

fn escape_char(c: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '\'' => "\\'".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        other => other.to_string(),
    }
}
