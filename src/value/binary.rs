// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Binary literal scanner/formatter: `[base64]`, whitespace ignored inside.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::LiteralError;
use crate::value::Value;

/// Scans a binary literal, including its surrounding brackets.
pub(crate) fn scan_binary(text: &str) -> Result<Value, LiteralError> {
    let inner = text
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| LiteralError::new("unterminated binary literal"))?;

    let cleaned: String = inner.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(cleaned.as_bytes())
        .map(Value::Binary)
        .map_err(|e| LiteralError::new(format!("invalid base64 in binary literal: {e}")))
}

/// Base64-encodes `bytes` using the standard alphabet, for serialization.
pub(crate) fn encode_binary(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_binary_literal() {
        assert_eq!(
            scan_binary("[aGk=]").unwrap(),
            Value::Binary(vec![0x68, 0x69])
        );
    }

    #[test]
    fn ignores_internal_whitespace() {
        assert_eq!(
            scan_binary("[ aG k=\n]").unwrap(),
            Value::Binary(vec![0x68, 0x69])
        );
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(scan_binary("[not base64!!]").is_err());
    }

    #[test]
    fn round_trips_through_encode() {
        let bytes = vec![1, 2, 3, 255];
        let encoded = encode_binary(&bytes);
        let literal = format!("[{encoded}]");
        assert_eq!(scan_binary(&literal).unwrap(), Value::Binary(bytes));
    }
}
