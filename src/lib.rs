// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lexer, parser, typed-value model, and serializer for the Simple Declarative Language (SDL): a
//! human-readable, tag-oriented configuration format. A document is a forest of [`Tag`]s, each
//! with an optional namespace, an ordered list of typed [`Value`]s, an unordered set of typed
//! attributes, and an ordered list of children.
//!
//! ```
//! let tags = sdl::parse_document_str("greeting \"hello\"").unwrap();
//! assert_eq!(tags[0].name(), "greeting");
//! ```

mod assembler;
mod error;
mod identifier;
mod keyword;
mod line_source;
mod parse;
mod serializer;
mod tag;
mod token;
mod tokenizer;
mod value;

pub use error::{CoercionError, ParseError};
pub use parse::{parse_attributes, parse_document, parse_document_str, parse_literal, parse_values};
pub use tag::Tag;
pub use value::{Date, DateTime, IntoValue, TimeSpan, Value};

pub use identifier::is_valid_identifier;
