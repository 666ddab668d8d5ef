// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `TimeSpan` value, the crate-private `TimeSpanWithZone` intermediate the tokenizer produces,
//! and the scanner that parses both out of one colon-delimited literal.

use crate::error::LiteralError;

/// A signed span of days, hours, minutes, seconds, and milliseconds.
///
/// Stored as a `negative` flag plus unsigned magnitudes rather than as signed fields throughout:
/// the grammar always places the sign once, at the front of the whole literal, so a single flag
/// is both simpler and sufficient to round-trip every input in the boundary-behavior table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub negative: bool,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl TimeSpan {
    pub fn new(negative: bool, days: u32, hours: u32, minutes: u32, seconds: u32, millis: u32) -> Self {
        TimeSpan {
            negative,
            days,
            hours,
            minutes,
            seconds,
            millis,
        }
    }

    pub(crate) fn from_with_zone(ts: &TimeSpanWithZone) -> Self {
        TimeSpan::new(ts.negative, ts.days, ts.hours, ts.minutes, ts.seconds, ts.millis)
    }
}

/// The tokenizer's provisional reading of a `TimeOrSpan` token: it may resolve to a bare
/// [`TimeSpan`] or to the time portion of a `DateTime`, decided by the assembler. Never exposed
/// through the public `Value` type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TimeSpanWithZone {
    pub negative: bool,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
    pub timezone: Option<String>,
}

/// Parses one to three fractional-second digits into milliseconds (one digit -> x100, two ->
/// x10, three -> x1).
fn parse_fraction_millis(frac: &str) -> Result<u32, LiteralError> {
    let digits: u32 = frac
        .parse()
        .map_err(|_| LiteralError::new(format!("invalid fractional seconds {frac:?}")))?;
    match frac.len() {
        1 => Ok(digits * 100),
        2 => Ok(digits * 10),
        3 => Ok(digits),
        _ => Err(LiteralError::new(
            "fractional seconds must be one to three digits",
        )),
    }
}

/// Scans a `(-)(Dd:)HH:MM(:SS(.fff))(-tz)` literal.
pub(crate) fn scan_time_or_span(text: &str) -> Result<TimeSpanWithZone, LiteralError> {
    let mut rest = text;
    let negative = if let Some(stripped) = rest.strip_prefix('-') {
        rest = stripped;
        true
    } else {
        false
    };

    let mut days = 0u32;
    match rest.find(':') {
        Some(idx) => {
            let seg0 = &rest[..idx];
            if let Some(numeric) = seg0.strip_suffix('d') {
                days = numeric
                    .parse()
                    .map_err(|_| LiteralError::new(format!("invalid day component {seg0:?}")))?;
                rest = &rest[idx + 1..];
            }
        }
        None => {
            return Err(LiteralError::new(
                "time/time-span requires at least two colon-delimited segments",
            ));
        }
    }

    // Everything after the (optional) first remaining `-` is a verbatim timezone designator; the
    // overall sign has already been stripped, so any `-` here marks that boundary even though the
    // designator itself (e.g. `GMT-05:00`) may contain further `-`/`:` characters.
    let (core, timezone) = match rest.find('-') {
        Some(idx) => (&rest[..idx], Some(rest[idx + 1..].to_string())),
        None => (rest, None),
    };

    let segs: Vec<&str> = core.split(':').collect();
    if segs.len() < 2 || segs.len() > 3 {
        return Err(LiteralError::new(
            "time/time-span must have two or three colon-delimited segments after the optional day",
        ));
    }

    let hours: u32 = segs[0]
        .parse()
        .map_err(|_| LiteralError::new(format!("invalid hour component {:?}", segs[0])))?;
    let minutes: u32 = segs[1]
        .parse()
        .map_err(|_| LiteralError::new(format!("invalid minute component {:?}", segs[1])))?;

    let (seconds, millis) = if segs.len() == 3 {
        match segs[2].split_once('.') {
            Some((s, frac)) => {
                let seconds: u32 = s
                    .parse()
                    .map_err(|_| LiteralError::new(format!("invalid seconds component {s:?}")))?;
                (seconds, parse_fraction_millis(frac)?)
            }
            None => {
                let seconds: u32 = segs[2]
                    .parse()
                    .map_err(|_| LiteralError::new(format!("invalid seconds component {:?}", segs[2])))?;
                (seconds, 0)
            }
        }
    } else {
        (0, 0)
    };

    Ok(TimeSpanWithZone {
        negative,
        days,
        hours,
        minutes,
        seconds,
        millis,
        timezone,
    })
}
