// src/util/date.rs
//
// Calendar date parsing for request payloads.
//
// Errors name the part of the input that is wrong (month, day, or the overall
// layout) so the client can show the message as-is.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{AppError, AppResult};

fn iso_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})$")
            .expect("ISO date pattern is a valid regex")
    })
}

/// Parse a `yyyy-MM-dd` birth date
pub fn parse_birth_date(raw: &str) -> AppResult<NaiveDate> {
    let caps = iso_date_pattern()
        .captures(raw)
        .ok_or_else(|| malformed_format(raw))?;

    // The pattern guarantees ASCII digits, so these parses cannot fail
    let year: i32 = caps["year"].parse().map_err(|_| malformed_format(raw))?;
    let month: u32 = caps["month"].parse().map_err(|_| malformed_format(raw))?;
    let day: u32 = caps["day"].parse().map_err(|_| malformed_format(raw))?;

    if !(1..=12).contains(&month) {
        return Err(AppError::MalformedDate(format!(
            "Invalid month in birthDate: {} Valid month dates are (01-12)",
            raw
        )));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::MalformedDate(format!(
            "Invalid day in birthDate: {} Valid day dates are (01-28/31)",
            raw
        ))
    })
}

fn malformed_format(raw: &str) -> AppError {
    AppError::MalformedDate(format!(
        "Invalid birthDate format: {} Correct format is yyyy-MM-dd",
        raw
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::actor::entity::ISO_DATE_FORMAT;

    fn message(raw: &str) -> String {
        match parse_birth_date(raw) {
            Err(AppError::MalformedDate(msg)) => msg,
            other => panic!("expected MalformedDate for {raw}, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_date() {
        let date = parse_birth_date("1980-05-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1980, 5, 1).unwrap());
        assert_eq!(date.format(ISO_DATE_FORMAT).to_string(), "1980-05-01");
    }

    #[test]
    fn test_leap_day() {
        assert!(parse_birth_date("2000-02-29").is_ok());
        assert!(message("2001-02-29").starts_with("Invalid day in birthDate: 2001-02-29"));
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(
            message("1980-13-01"),
            "Invalid month in birthDate: 1980-13-01 Valid month dates are (01-12)"
        );
        assert!(message("1980-00-10").starts_with("Invalid month"));
    }

    #[test]
    fn test_invalid_day() {
        assert_eq!(
            message("1980-04-31"),
            "Invalid day in birthDate: 1980-04-31 Valid day dates are (01-28/31)"
        );
        assert!(message("1980-01-00").starts_with("Invalid day"));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(
            message("01/05/1980"),
            "Invalid birthDate format: 01/05/1980 Correct format is yyyy-MM-dd"
        );
        assert!(message("1980-5-1").starts_with("Invalid birthDate format"));
        assert!(message("").starts_with("Invalid birthDate format"));
    }
}
