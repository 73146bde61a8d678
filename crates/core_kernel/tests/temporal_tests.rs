//! Unit tests for the Temporal module
//!
//! Tests cover DateRange reporting periods and Timezone conversions.

use chrono::{NaiveDate, TimeZone, Timelike, Utc};
use core_kernel::{DateRange, TemporalError, Timezone};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod date_range {
    use super::*;

    #[test]
    fn test_same_day_range_is_valid() {
        let range = DateRange::new(date(2024, 1, 15), date(2024, 1, 15)).unwrap();
        assert_eq!(range.days(), 1);
        assert_eq!(range, DateRange::day(date(2024, 1, 15)));
    }

    #[test]
    fn test_reversed_range_error_message() {
        let err = DateRange::new(date(2024, 3, 1), date(2024, 2, 1)).unwrap_err();
        assert!(err.to_string().contains("2024-03-01"));
    }

    #[test]
    fn test_quarter_boundaries() {
        let q1 = DateRange::quarter_containing(date(2024, 3, 31)).unwrap();
        assert_eq!(q1.start, date(2024, 1, 1));
        assert_eq!(q1.end, date(2024, 3, 31));

        let q2 = DateRange::quarter_containing(date(2024, 4, 1)).unwrap();
        assert_eq!(q2.start, date(2024, 4, 1));
        assert_eq!(q2.end, date(2024, 6, 30));
        assert_eq!(q2.quarter_label(), "Q2 2024");
    }

    #[test]
    fn test_month_of_december_rolls_year() {
        let range = DateRange::month_containing(date(2023, 12, 25)).unwrap();
        assert_eq!(range.end, date(2023, 12, 31));
    }

    #[test]
    fn test_serde_shape() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["start"], "2024-01-01");
        assert_eq!(json["end"], "2024-01-31");
    }
}

mod timezone {
    use super::*;

    #[test]
    fn test_default_is_sydney() {
        assert_eq!(Timezone::default().name(), "Australia/Sydney");
    }

    #[test]
    fn test_local_time_in_winter() {
        // AEST (UTC+10) applies in July.
        let tz = Timezone::default();
        let utc = Utc.with_ymd_and_hms(2024, 7, 1, 0, 30, 0).unwrap();
        assert_eq!(tz.local_time(utc).hour(), 10);
    }

    #[test]
    fn test_unknown_zone_error() {
        let err = "Nowhere/Special".parse::<Timezone>().unwrap_err();
        assert_eq!(err, TemporalError::UnknownTimezone("Nowhere/Special".to_string()));
    }

    #[test]
    fn test_deserialize_from_string() {
        let tz: Timezone = serde_json::from_str("\"Australia/Brisbane\"").unwrap();
        assert_eq!(tz.name(), "Australia/Brisbane");
    }
}
