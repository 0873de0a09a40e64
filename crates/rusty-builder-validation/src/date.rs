//! Calendar date validation

use chrono::{DateTime, NaiveDate};

pub const DATE_MESSAGE: &str = "Please enter a valid date";

/// Parses a date input value.
///
/// Accepts the `YYYY-MM-DD` form a date input produces, or a full RFC 3339
/// timestamp (its calendar date is returned).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Validates that the value is a real calendar date
pub fn validate_date(value: &str) -> Result<(), String> {
    match parse_date(value) {
        Some(_) => Ok(()),
        None => Err(DATE_MESSAGE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_dates() {
        assert!(validate_date("2024-02-29").is_ok());
        assert!(validate_date("1999-12-31").is_ok());
        assert_eq!(
            parse_date("2024-07-04"),
            NaiveDate::from_ymd_opt(2024, 7, 4)
        );
    }

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(
            parse_date("2024-07-04T10:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 7, 4)
        );
    }

    #[test]
    fn test_impossible_dates() {
        assert!(validate_date("2023-02-29").is_err());
        assert!(validate_date("2024-13-01").is_err());
        assert!(validate_date("tomorrow").is_err());
        assert_eq!(validate_date(""), Err(DATE_MESSAGE.to_string()));
    }
}
