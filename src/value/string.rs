// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Double-quoted (escape-aware, line-continuable) and back-quoted (raw, multi-line) string
//! scanners.

use crate::error::LiteralError;
use crate::value::Value;

/// Counts the trailing run of `\` characters in `s`; used by the tokenizer to decide whether a
/// `"` it has just reached is escaped (an odd count) or closes the literal (an even count).
pub(crate) fn count_trailing_backslashes(s: &str) -> usize {
    s.chars().rev().take_while(|&c| c == '\\').count()
}

/// Scans a double-quoted string literal, including its surrounding quotes. `text` may span
/// multiple physical lines joined by real `\n` characters (the tokenizer is responsible for
/// gathering those lines; this function only interprets escapes and collapses continuations).
pub(crate) fn scan_double_quoted(text: &str) -> Result<Value, LiteralError> {
    let inner = text
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| LiteralError::new("unterminated string literal"))?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let mut lookahead = chars.clone();
        let mut ws_count = 0usize;
        while matches!(lookahead.peek(), Some(' ') | Some('\t')) {
            lookahead.next();
            ws_count += 1;
        }
        if matches!(lookahead.peek(), Some('\n') | Some('\r')) {
            for _ in 0..ws_count {
                chars.next();
            }
            if chars.peek() == Some(&'\r') {
                chars.next();
            }
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            while matches!(chars.peek(), Some(' ') | Some('\t')) {
                chars.next();
            }
            continue;
        }

        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => {
                return Err(LiteralError::new(format!(
                    "illegal escape '\\{other}' in string literal"
                )));
            }
            None => return Err(LiteralError::new("unterminated escape in string literal")),
        }
    }

    Ok(Value::Str(out))
}

/// Scans a back-quoted raw string literal, including its surrounding backticks. No escapes are
/// recognized; embedded newlines are preserved verbatim.
pub(crate) fn scan_back_quoted(text: &str) -> Result<Value, LiteralError> {
    let inner = text
        .strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
        .ok_or_else(|| LiteralError::new("unterminated raw string literal"))?;
    Ok(Value::Str(inner.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_plain_string() {
        assert_eq!(
            scan_double_quoted("\"hello\"").unwrap(),
            Value::Str("hello".to_string())
        );
    }

    #[test]
    fn scans_escapes() {
        assert_eq!(
            scan_double_quoted("\"a\\nb\\tc\\\\d\\\"e\"").unwrap(),
            Value::Str("a\nb\tc\\d\"e".to_string())
        );
    }

    #[test]
    fn rejects_illegal_escape() {
        assert!(scan_double_quoted("\"\\q\"").is_err());
    }

    #[test]
    fn collapses_line_continuation() {
        let joined = "\"foo\\\n    bar\"";
        assert_eq!(
            scan_double_quoted(joined).unwrap(),
            Value::Str("foobar".to_string())
        );
    }

    #[test]
    fn back_quoted_preserves_raw_newlines() {
        let joined = "`line one\nline two`";
        assert_eq!(
            scan_back_quoted(joined).unwrap(),
            Value::Str("line one\nline two".to_string())
        );
    }
}
