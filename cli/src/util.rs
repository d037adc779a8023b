// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::NaiveDate;
use evex_core::DateRange;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, Box<dyn Error>> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| format!("Invalid date {s:?}, expected YYYY-MM-DD").into())
}

/// Build the date-range criterion from the `--from`/`--until` arguments.
/// Both bounds are required together; the range is inclusive.
pub fn parse_date_range(
    from: Option<&str>,
    until: Option<&str>,
) -> Result<Option<DateRange>, Box<dyn Error>> {
    match (from, until) {
        (None, None) => Ok(None),
        (Some(from), Some(until)) => {
            let start = parse_date(from)?;
            let end = parse_date(until)?;
            match DateRange::new(start, end) {
                Some(range) => Ok(Some(range)),
                None => Err("--from must not be after --until".into()),
            }
        }
        _ => Err("--from and --until must be given together".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date("2024-03-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("03/15/2024").is_err());
        assert!(parse_date("2024-3-151").is_err());
        assert!(parse_date("today").is_err());
    }

    #[test]
    fn parse_date_range_requires_both_bounds() {
        assert!(parse_date_range(Some("2024-03-01"), None).is_err());
        assert!(parse_date_range(None, Some("2024-03-31")).is_err());
        assert!(parse_date_range(None, None).unwrap().is_none());
    }

    #[test]
    fn parse_date_range_rejects_reversed_bounds() {
        assert!(parse_date_range(Some("2024-04-01"), Some("2024-03-01")).is_err());
    }

    #[test]
    fn parse_date_range_accepts_single_day() {
        let range = parse_date_range(Some("2024-03-15"), Some("2024-03-15"))
            .unwrap()
            .unwrap();
        assert_eq!(range.start, range.end);
    }
}
