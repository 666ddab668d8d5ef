// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Token kinds produced by the tokenizer for one token-line.

use crate::value::Value;
use crate::value::timespan::TimeSpanWithZone;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Identifier(String),
    Literal(Value),
    /// A provisional reading of a `HH:MM(:SS)(.fff)(-tz)` run; the assembler decides whether it
    /// becomes a bare `TimeSpan` or combines with a preceding `Date` into a `DateTime`.
    TimeOrSpan(TimeSpanWithZone),
    Colon,
    Equals,
    StartBlock,
    EndBlock,
}
