// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Number literal scanner: `Int32`, `Int64`, `Float32`, `Float64`, and `Decimal`, disambiguated
//! by an optional decimal point and a case-insensitive suffix.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::LiteralError;
use crate::value::Value;

/// Scans a number literal: a leading run of `-0..9.` (the body) followed by an optional suffix
/// (`L`, `F`, `D`, or `BD`, case-insensitive) that selects the variant.
pub(crate) fn scan_number(text: &str) -> Result<Value, LiteralError> {
    let mut end = text.len();
    let mut dot_count = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '0'..='9' => {}
            '-' if i == 0 => {}
            '.' => dot_count += 1,
            _ => {
                end = i;
                break;
            }
        }
    }

    let (body, suffix) = text.split_at(end);
    if dot_count > 1 {
        return Err(LiteralError::new(
            "number literal has more than one decimal point",
        ));
    }
    if body.ends_with('.') {
        return Err(LiteralError::new(
            "number literal has a trailing decimal point",
        ));
    }
    if body.is_empty() || body == "-" {
        return Err(LiteralError::new("empty number literal"));
    }
    let has_dot = dot_count == 1;

    match suffix.to_ascii_uppercase().as_str() {
        "" if has_dot => lexical::parse::<f64, _>(body)
            .map(Value::Float64)
            .map_err(|_| LiteralError::new(format!("invalid float literal {body:?}"))),
        "" => lexical::parse::<i32, _>(body)
            .map(Value::Int32)
            .map_err(|_| LiteralError::new(format!("invalid integer literal {body:?}"))),
        "L" => {
            if has_dot {
                return Err(LiteralError::new(
                    "an `L`-suffixed integer literal may not contain a decimal point",
                ));
            }
            lexical::parse::<i64, _>(body)
                .map(Value::Int64)
                .map_err(|_| LiteralError::new(format!("invalid integer literal {body:?}")))
        }
        "F" => lexical::parse::<f32, _>(body)
            .map(Value::Float32)
            .map_err(|_| LiteralError::new(format!("invalid float literal {body:?}"))),
        "D" => lexical::parse::<f64, _>(body)
            .map(Value::Float64)
            .map_err(|_| LiteralError::new(format!("invalid float literal {body:?}"))),
        "BD" => BigDecimal::from_str(body)
            .map(Value::Decimal)
            .map_err(|_| LiteralError::new(format!("invalid decimal literal {body:?}"))),
        other => Err(LiteralError::new(format!(
            "unrecognized numeric suffix {other:?}"
        ))),
    }
}
