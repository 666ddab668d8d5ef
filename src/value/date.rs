// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `Date` value and its literal scanner (`YYYY/MM/DD`).

use crate::error::LiteralError;

/// A proleptic-Gregorian calendar date with unconstrained, non-negative components.
///
/// Unlike a typical calendar-date type, `Date` performs no range validation: a single-digit year
/// (`582`) or an out-of-range day are both legal, per the literal grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn new(year: u32, month: u32, day: u32) -> Self {
        Date { year, month, day }
    }
}

/// Scans a `YYYY/MM/DD` literal (no surrounding whitespace).
pub(crate) fn scan_date(text: &str) -> Result<Date, LiteralError> {
    let mut parts = text.splitn(3, '/');
    let year = parts
        .next()
        .ok_or_else(|| LiteralError::new("empty date literal"))?;
    let month = parts
        .next()
        .ok_or_else(|| LiteralError::new("date literal is missing its month component"))?;
    let day = parts
        .next()
        .ok_or_else(|| LiteralError::new("date literal is missing its day component"))?;
    if day.contains('/') {
        return Err(LiteralError::new(
            "date literal has more than three components",
        ));
    }

    let year: u32 = year
        .parse()
        .map_err(|_| LiteralError::new(format!("invalid year component {year:?} in date literal")))?;
    let month: u32 = month.parse().map_err(|_| {
        LiteralError::new(format!("invalid month component {month:?} in date literal"))
    })?;
    let day: u32 = day
        .parse()
        .map_err(|_| LiteralError::new(format!("invalid day component {day:?} in date literal")))?;

    Ok(Date::new(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_ordinary_date() {
        assert_eq!(scan_date("2005/12/31").unwrap(), Date::new(2005, 12, 31));
    }

    #[test]
    fn scans_single_digit_year() {
        assert_eq!(scan_date("582/1/2").unwrap(), Date::new(582, 1, 2));
    }

    #[test]
    fn rejects_too_few_components() {
        assert!(scan_date("2005/12").is_err());
    }

    #[test]
    fn rejects_too_many_components() {
        assert!(scan_date("2005/12/31/1").is_err());
    }

    #[test]
    fn rejects_non_numeric_component() {
        assert!(scan_date("2005/aa/31").is_err());
    }
}
