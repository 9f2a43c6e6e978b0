// ABOUTME: Civil (time-zone-naive) date type with the canonical YYYY-MM-DD text form
// ABOUTME: Normalizes instants to midnight so date subtraction never drifts across time zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Challenge Tracker Contributors

//! Civil dates.
//!
//! A [`CivilDate`] is a year/month/day triple with no time-of-day and no time
//! zone. Every instant entering the calendar engine is converted to a civil
//! date first (`DateTime<Tz>` in its own zone, `NaiveDateTime` by dropping the
//! time), so all comparisons and subtractions are whole-day operations.
//!
//! The only text form accepted or produced is `YYYY-MM-DD`. Parsing is strict:
//! the input must format back to exactly the same string.

use challenge_core::constants::DATE_FORMAT;
use challenge_core::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar date with no time-of-day or time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Build a date from year, month (1-12) and day (1-31)
    ///
    /// Returns `None` for dates that do not exist (e.g. February 30th).
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse the canonical `YYYY-MM-DD` form
    ///
    /// The string is read as a civil date, never as an instant, so no
    /// time-zone shift can move it to a neighbouring day.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` if the text is not exactly a valid
    /// `YYYY-MM-DD` date (missing zero padding, trailing time, whitespace,
    /// or a non-existent day).
    pub fn parse(text: &str) -> AppResult<Self> {
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| {
            AppError::invalid_format(format!("expected a YYYY-MM-DD date, got '{text}'"))
                .with_field("date")
                .with_source(e)
        })?;

        // chrono accepts unpadded fields; the interchange contract does not
        if date.format(DATE_FORMAT).to_string() != text {
            return Err(AppError::invalid_format(format!(
                "expected a zero-padded YYYY-MM-DD date, got '{text}'"
            ))
            .with_field("date"));
        }

        Ok(Self(date))
    }

    /// The underlying chrono date
    #[must_use]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    /// Day of the week
    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Whether this date falls on a Monday
    #[must_use]
    pub fn is_monday(self) -> bool {
        self.weekday() == Weekday::Mon
    }

    /// Shift by `days` (negative moves backwards)
    ///
    /// Saturates at the first/last representable date instead of
    /// overflowing.
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        Self(shifted.unwrap_or(if days >= 0 {
            NaiveDate::MAX
        } else {
            NaiveDate::MIN
        }))
    }

    /// Whole days from `earlier` to `self` (negative if `self` is earlier)
    #[must_use]
    pub fn days_since(self, earlier: Self) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Same calendar day
    #[must_use]
    pub fn is_same_day(self, other: Self) -> bool {
        self == other
    }

    /// Strictly before `today`
    #[must_use]
    pub fn is_before(self, today: Self) -> bool {
        self < today
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CivilDate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for CivilDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CivilDate {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self(datetime.date_naive())
    }
}

impl From<CivilDate> for NaiveDate {
    fn from(date: CivilDate) -> Self {
        date.0
    }
}

impl Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime, Utc};

    fn date(text: &str) -> CivilDate {
        CivilDate::parse(text).unwrap()
    }

    #[test]
    fn test_parse_and_format_canonical() {
        let parsed = date("2024-01-01");
        assert_eq!(parsed.to_string(), "2024-01-01");
        assert_eq!(parsed, CivilDate::from_ymd(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_rejects_non_canonical_forms() {
        for bad in [
            "2024-1-5",
            "2024-02-30",
            "2024-01-01T00:00",
            " 2024-01-01",
            "2024/01/01",
            "",
        ] {
            assert!(CivilDate::parse(bad).is_err(), "'{bad}' should be rejected");
        }
    }

    #[test]
    fn test_parse_error_code_is_invalid_format() {
        let err = CivilDate::parse("01-01-2024").unwrap_err();
        assert_eq!(err.code, challenge_core::errors::ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_leap_day() {
        assert!(CivilDate::parse("2024-02-29").is_ok());
        assert!(CivilDate::parse("2023-02-29").is_err());
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        assert_eq!(date("2023-12-30").add_days(3), date("2024-01-02"));
        assert_eq!(date("2024-03-01").add_days(-1), date("2024-02-29"));
        assert_eq!(date("2024-01-01").add_days(0), date("2024-01-01"));
    }

    #[test]
    fn test_add_days_saturates() {
        assert_eq!(
            date("2024-01-01").add_days(i64::MAX).naive(),
            NaiveDate::MAX
        );
        assert_eq!(
            date("2024-01-01").add_days(i64::MIN).naive(),
            NaiveDate::MIN
        );
    }

    #[test]
    fn test_days_since_is_signed() {
        assert_eq!(date("2024-01-08").days_since(date("2024-01-01")), 7);
        assert_eq!(date("2024-01-01").days_since(date("2024-01-08")), -7);
    }

    #[test]
    fn test_instant_conversion_uses_local_civil_day() {
        // 23:30 on Jan 1st at UTC-05:00 is already Jan 2nd in UTC
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let late_evening = offset.with_ymd_and_hms(2024, 1, 1, 23, 30, 0).unwrap();
        assert_eq!(CivilDate::from(late_evening), date("2024-01-01"));
        assert_eq!(
            CivilDate::from(late_evening.with_timezone(&Utc)),
            date("2024-01-02")
        );
    }

    #[test]
    fn test_naive_datetime_drops_time() {
        let naive = date("2024-05-06")
            .naive()
            .and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(CivilDate::from(naive), date("2024-05-06"));
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let json = serde_json::to_string(&date("2024-07-04")).unwrap();
        assert_eq!(json, "\"2024-07-04\"");
        let back: CivilDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date("2024-07-04"));
        assert!(serde_json::from_str::<CivilDate>("\"2024-7-4\"").is_err());
    }

    #[test]
    fn test_same_day_and_before() {
        let today = date("2024-06-10");
        assert!(today.is_same_day(date("2024-06-10")));
        assert!(date("2024-06-09").is_before(today));
        assert!(!today.is_before(today));
    }
}
