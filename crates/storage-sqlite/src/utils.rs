//! Text encodings for values stored in SQLite.
//!
//! Dates, timestamps and decimals are kept as TEXT. The date and timestamp
//! formats are fixed width, so lexicographic order in SQL matches
//! chronological order.

use std::str::FromStr;

use budgetflow_core::errors::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, DATE_FORMAT)?)
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)?)
}

pub fn parse_decimal(value: &str) -> Result<Decimal> {
    Ok(Decimal::from_str(value)?)
}

pub fn parse_optional_decimal(value: Option<&str>) -> Result<Option<Decimal>> {
    value.map(parse_decimal).transpose()
}

/// Current UTC time truncated to whole seconds, as stored in `created_at`.
pub fn now_timestamp() -> String {
    format_timestamp(chrono::Utc::now().naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_sort_lexicographically() {
        let earlier = format_date(NaiveDate::from_ymd_opt(2024, 2, 9).unwrap());
        let later = format_date(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
        assert_eq!(earlier, "2024-02-09");
        assert!(earlier < later);
    }

    #[test]
    fn timestamps_round_trip_without_fraction() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(format_timestamp(ts), "2024-01-05T09:30:00");
        assert_eq!(parse_timestamp("2024-01-05T09:30:00").unwrap(), ts);
    }

    #[test]
    fn malformed_values_are_validation_errors() {
        assert!(parse_decimal("12,5").is_err());
        assert!(parse_date("05/01/2024").is_err());
        assert_eq!(parse_optional_decimal(None).unwrap(), None);
    }
}
