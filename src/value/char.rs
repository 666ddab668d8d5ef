// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Character literal scanner: `'c'` or `'\e'` for `e` in `{\\, ', n, r, t}`.

use crate::error::LiteralError;
use crate::value::Value;

/// Scans a character literal, including its surrounding apostrophes.
pub(crate) fn scan_char(text: &str) -> Result<Value, LiteralError> {
    let inner = text
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .ok_or_else(|| LiteralError::new("unterminated character literal"))?;

    let mut chars = inner.chars();
    let c = match chars.next() {
        Some('\\') => match chars.next() {
            Some('\\') => '\\',
            Some('\'') => '\'',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some(other) => {
                return Err(LiteralError::new(format!(
                    "illegal escape '\\{other}' in character literal"
                )));
            }
            None => return Err(LiteralError::new("unterminated escape in character literal")),
        },
        Some(c) => c,
        None => return Err(LiteralError::new("empty character literal")),
    };

    if chars.next().is_some() {
        return Err(LiteralError::new(
            "character literal must contain exactly one scalar value",
        ));
    }

    Ok(Value::Char(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_plain_char() {
        assert_eq!(scan_char("'x'").unwrap(), Value::Char('x'));
    }

    #[test]
    fn scans_escapes() {
        assert_eq!(scan_char("'\\n'").unwrap(), Value::Char('\n'));
        assert_eq!(scan_char("'\\t'").unwrap(), Value::Char('\t'));
        assert_eq!(scan_char("'\\\\'").unwrap(), Value::Char('\\'));
        assert_eq!(scan_char("'\\''").unwrap(), Value::Char('\''));
    }

    #[test]
    fn rejects_illegal_escape() {
        assert!(scan_char("'\\q'").is_err());
    }

    #[test]
    fn rejects_multi_scalar_literal() {
        assert!(scan_char("'xy'").is_err());
    }

    #[test]
    fn rejects_empty_literal() {
        assert!(scan_char("''").is_err());
    }
}
