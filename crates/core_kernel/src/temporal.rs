//! Calendar handling types
//!
//! This module provides the date types shared by bookkeeping and reporting:
//! - Inclusive date ranges for reporting periods (months, BAS quarters)
//! - A serializable time zone used to stamp generated statements

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Timezone wrapper for statement generation
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(s.to_string()))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the IANA name of the zone
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Converts a UTC datetime to the local timezone
    pub fn to_local(&self, utc: DateTime<Utc>) -> DateTime<Tz> {
        utc.with_timezone(&self.0)
    }

    /// Calendar date of a UTC instant in this zone
    pub fn local_date(&self, utc: DateTime<Utc>) -> NaiveDate {
        self.to_local(utc).date_naive()
    }

    /// Wall-clock time of a UTC instant in this zone
    pub fn local_time(&self, utc: DateTime<Utc>) -> NaiveTime {
        self.to_local(utc).time()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Australia::Sydney)
    }
}

/// Errors related to calendar operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Unknown time zone: {0}")]
    UnknownTimezone(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

/// An inclusive range of calendar dates used for reporting periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// A single-day range
    pub fn day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    /// The calendar month containing `date`
    pub fn month_containing(date: NaiveDate) -> Result<Self, TemporalError> {
        let start = first_of_month(date.year(), date.month())?;
        let end = last_of_month(date.year(), date.month())?;
        Ok(Self { start, end })
    }

    /// The calendar quarter (Jan-Mar, Apr-Jun, ...) containing `date`
    pub fn quarter_containing(date: NaiveDate) -> Result<Self, TemporalError> {
        let first_month = (date.month0() / 3) * 3 + 1;
        let start = first_of_month(date.year(), first_month)?;
        let end = last_of_month(date.year(), first_month + 2)?;
        Ok(Self { start, end })
    }

    /// Inclusive containment
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, counting both ends
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Calendar quarter label of the range start, e.g. `Q1 2024`
    pub fn quarter_label(&self) -> String {
        format!("Q{} {}", self.start.month0() / 3 + 1, self.start.year())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, TemporalError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| TemporalError::OutOfRange(format!("{year}-{month:02}")))
}

fn last_of_month(year: i32, month: u32) -> Result<NaiveDate, TemporalError> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    first_of_month(next_year, next_month)?
        .pred_opt()
        .ok_or_else(|| TemporalError::OutOfRange(format!("{year}-{month:02}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = DateRange::new(date(2024, 1, 13), date(2024, 1, 15)).unwrap();
        assert!(range.contains(date(2024, 1, 13)));
        assert!(range.contains(date(2024, 1, 15)));
        assert!(!range.contains(date(2024, 1, 16)));
        assert_eq!(range.days(), 3);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let result = DateRange::new(date(2024, 2, 1), date(2024, 1, 1));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_month_containing_leap_february() {
        let range = DateRange::month_containing(date(2024, 2, 10)).unwrap();
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));
    }

    #[test]
    fn test_quarter_containing_december() {
        let range = DateRange::quarter_containing(date(2024, 12, 5)).unwrap();
        assert_eq!(range.start, date(2024, 10, 1));
        assert_eq!(range.end, date(2024, 12, 31));
        assert_eq!(range.quarter_label(), "Q4 2024");
    }

    #[test]
    fn test_sydney_local_date_crosses_midnight() {
        let tz = Timezone::default();
        let utc = Utc.with_ymd_and_hms(2024, 1, 14, 20, 0, 0).unwrap();
        assert_eq!(tz.local_date(utc), date(2024, 1, 15));
    }

    #[test]
    fn test_timezone_parse() {
        let tz: Timezone = "Australia/Perth".parse().unwrap();
        assert_eq!(tz.name(), "Australia/Perth");
        assert!("Mars/Olympus".parse::<Timezone>().is_err());
    }
}
