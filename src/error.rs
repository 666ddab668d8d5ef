// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Error types raised by the lexer, parser, and tag mutators.

/// A lexical or syntactic failure while parsing a document or a stand-alone literal.
///
/// Carries a 1-based line and column so callers can point an editor or diagnostic at the
/// offending source position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (line {line}, column {column})")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        ParseError {
            message: message.into(),
            line,
            column,
        }
    }
}

/// An attempt to store a host value with no SDL variant, or to give a mutator an invalid
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct CoercionError(String);

impl CoercionError {
    pub fn new(description: impl Into<String>) -> Self {
        CoercionError(description.into())
    }
}

/// Position-less error raised by the pure literal scanners in `value/`. The tokenizer attaches
/// line/column context and converts this into a [`ParseError`] before it becomes observable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub(crate) struct LiteralError(pub String);

impl LiteralError {
    pub fn new(message: impl Into<String>) -> Self {
        LiteralError(message.into())
    }
}

impl LiteralError {
    pub(crate) fn into_parse_error(self, line: usize, column: usize) -> ParseError {
        ParseError::new(self.0, line, column)
    }
}
