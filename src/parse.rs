// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Public parse entry points: whole documents, standalone value lists, attribute lists, and
//! single literals.

use std::collections::BTreeMap;
use std::io::{self, Read};

use crate::assembler::Assembler;
use crate::error::ParseError;
use crate::keyword::{ATTRIBUTES_WRAPPER_NAME, KW_FALSE, KW_NULL, KW_OFF, KW_ON, KW_TRUE, VALUES_WRAPPER_NAME};
use crate::line_source::{lines_from_str, LineSource};
use crate::tag::Tag;
use crate::tokenizer::Tokenizer;
use crate::value::date::scan_date;
use crate::value::timespan::scan_time_or_span;
use crate::value::{binary, char as char_literal, number, string, DateTime, TimeSpan, Value};

fn parse_tags(text: &str) -> Result<Vec<Tag>, ParseError> {
    let tokenizer = Tokenizer::new(LineSource::new(lines_from_str(text)));
    Assembler::new(tokenizer).parse_forest()
}

/// Parses a full document from a `&str`, returning the top-level tags.
pub fn parse_document_str(text: &str) -> Result<Vec<Tag>, ParseError> {
    parse_tags(text)
}

/// Parses a full document from any `Read` source. The whole source is read into memory up
/// front; there is no streaming/incremental parse.
pub fn parse_document<R: Read>(mut source: R) -> Result<Vec<Tag>, ParseError> {
    let mut text = String::new();
    source
        .read_to_string(&mut text)
        .map_err(|e| ParseError::new(format!("I/O error reading document: {e}"), 0, 0))?;
    parse_tags(&text)
}

/// Parses `text` as the value list of an implicit root tag and returns its first child's values.
pub fn parse_values(text: &str) -> Result<Vec<Value>, ParseError> {
    let wrapped = format!("{VALUES_WRAPPER_NAME} {text}");
    let mut tags = parse_tags(&wrapped)?;
    Ok(tags.pop().map(|t| t.values().to_vec()).unwrap_or_default())
}

/// Parses `text` as the attribute list of an implicit `atts` tag.
pub fn parse_attributes(text: &str) -> Result<BTreeMap<String, Value>, ParseError> {
    let wrapped = format!("{ATTRIBUTES_WRAPPER_NAME} {text}");
    let tags = parse_tags(&wrapped)?;
    let tag = tags
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::new("empty attribute list", 1, 1))?;
    Ok(tag
        .attributes()
        .map(|(_, name, value)| (name.to_string(), value.clone()))
        .collect())
}

/// Parses a single stand-alone literal, dispatching on its leading character(s) per §6.
pub fn parse_literal(text: &str) -> Result<Value, ParseError> {
    let text = text.trim();
    let err = |msg: &str| ParseError::new(msg.to_string(), 1, 1);

    match text {
        KW_NULL => return Ok(Value::Null),
        KW_TRUE | KW_ON => return Ok(Value::Bool(true)),
        KW_FALSE | KW_OFF => return Ok(Value::Bool(false)),
        _ => {}
    }

    let first = text.chars().next().ok_or_else(|| err("empty literal"))?;
    match first {
        '"' => string::scan_double_quoted(text).map_err(|e| e.into_parse_error(1, 1)),
        '`' => string::scan_back_quoted(text).map_err(|e| e.into_parse_error(1, 1)),
        '\'' => char_literal::scan_char(text).map_err(|e| e.into_parse_error(1, 1)),
        '[' => binary::scan_binary(text).map_err(|e| e.into_parse_error(1, 1)),
        c if c.is_ascii_digit() || c == '-' || c == '.' => parse_number_date_or_span(text, &err),
        _ => Err(err(&format!("unrecognized literal {text:?}"))),
    }
}

fn parse_number_date_or_span(
    text: &str,
    err: &dyn Fn(&str) -> ParseError,
) -> Result<Value, ParseError> {
    if let Some((date_part, rest)) = text.split_once(' ') {
        if date_part.contains('/') {
            return scan_date_or_datetime(date_part, rest.trim(), err);
        }
    }
    if text.contains('/') {
        return scan_date(text)
            .map(Value::Date)
            .map_err(|e| e.into_parse_error(1, 1));
    }
    if text.contains(':') {
        let ts = scan_time_or_span(text).map_err(|e| e.into_parse_error(1, 1))?;
        if ts.timezone.is_some() {
            return Err(err("TimeSpan cannot have a timezone"));
        }
        return Ok(Value::TimeSpan(TimeSpan::from_with_zone(&ts)));
    }
    number::scan_number(text).map_err(|e| e.into_parse_error(1, 1))
}

fn scan_date_or_datetime(
    date_part: &str,
    time_part: &str,
    err: &dyn Fn(&str) -> ParseError,
) -> Result<Value, ParseError> {
    let date = scan_date(date_part).map_err(|e| e.into_parse_error(1, 1))?;
    if time_part.is_empty() {
        return Ok(Value::Date(date));
    }
    let ts = scan_time_or_span(time_part).map_err(|e| e.into_parse_error(1, 1))?;
    if ts.days != 0 {
        return Err(err("a DateTime's time portion cannot have a day component"));
    }
    Ok(Value::DateTime(DateTime::new(
        date, ts.hours, ts.minutes, ts.seconds, ts.millis, ts.timezone,
    )))
}
