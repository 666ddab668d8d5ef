// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `DateTime` value: a [`Date`] plus a time-of-day and an optional verbatim timezone designator.

use crate::value::date::Date;

/// A date and time of day, with an optional timezone designator carried verbatim (an IANA zone
/// id, a three-letter abbreviation, or `GMT±HH(:MM)`). No validation is performed on the
/// designator; it is stored and re-emitted exactly as written, per the design note that timezone
/// strings are never checked despite the documented contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    pub date: Date,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millis: u32,
    pub timezone: Option<String>,
}

impl DateTime {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: Date,
        hour: u32,
        minute: u32,
        second: u32,
        millis: u32,
        timezone: Option<String>,
    ) -> Self {
        DateTime {
            date,
            hour,
            minute,
            second,
            millis,
            timezone,
        }
    }
}

/// The default timezone designator used when serializing a `DateTime` with no explicit zone: the
/// process's local UTC offset, formatted as `GMT±HH:MM`.
#[cfg(feature = "jiff")]
pub(crate) fn process_local_gmt_offset() -> String {
    let offset = jiff::Zoned::now().offset();
    let total_minutes = offset.seconds() / 60;
    let sign = if total_minutes < 0 { '-' } else { '+' };
    let abs_minutes = total_minutes.unsigned_abs();
    format!("GMT{sign}{:02}:{:02}", abs_minutes / 60, abs_minutes % 60)
}

/// Without the `jiff` feature there is no portable way to read the process's local offset, so
/// absent timezones default to UTC.
#[cfg(not(feature = "jiff"))]
pub(crate) fn process_local_gmt_offset() -> String {
    "GMT+00:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_offset_has_gmt_prefix_and_colon() {
        let offset = process_local_gmt_offset();
        assert!(offset.starts_with("GMT"));
        assert!(offset.contains(':'));
    }
}
