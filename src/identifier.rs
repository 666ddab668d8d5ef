// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Identifier validation: a tag name, namespace, or attribute name starts with a Unicode letter
//! or `_` and continues with letter/digit/`_`/`-`/`.`.

use crate::error::CoercionError;

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_identifier_continue(c: char) -> bool {
    c == '_' || c == '-' || c == '.' || c.is_alphanumeric()
}

/// Returns `true` if `s` is a non-empty valid identifier.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_identifier_start(c) => chars.all(is_identifier_continue),
        _ => false,
    }
}

pub(crate) fn validate_identifier(name: &str) -> Result<(), CoercionError> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(CoercionError::new(format!("{name:?} is not a valid identifier")))
    }
}

/// As [`validate_identifier`], but an empty string (the "no namespace" case) is also accepted.
pub(crate) fn validate_identifier_allow_empty(name: &str) -> Result<(), CoercionError> {
    if name.is_empty() || is_valid_identifier(name) {
        Ok(())
    } else {
        Err(CoercionError::new(format!(
            "{name:?} is not a valid identifier"
        )))
    }
}
