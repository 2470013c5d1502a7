//! Proleptic Gregorian date value type.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A calendar day in the proleptic Gregorian calendar.
///
/// Ordering is chronological. Serializes as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new `Date` from year, month (1..=12), and day of month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the triple does not name a
    /// real day (e.g. February 29 in a common year).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the date `days` days later (earlier if negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] if the result is outside the
    /// representable range.
    pub fn add_days(self, days: i64) -> Result<Self, CalendarError> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .ok_or_else(|| CalendarError::Overflow {
                reason: format!("adding {days} days to {self}"),
            })
    }

    /// Returns the date `months` whole months later.
    ///
    /// When the day of month does not exist in the target month it is
    /// clamped to that month's last day, so January 31 plus one month is
    /// February 28 (or 29 in a leap year).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] if the result is outside the
    /// representable range.
    pub fn add_months(self, months: u32) -> Result<Self, CalendarError> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Self)
            .ok_or_else(|| CalendarError::Overflow {
                reason: format!("adding {months} months to {self}"),
            })
    }

    /// Returns the first day of this date's month.
    pub fn first_of_month(self) -> Self {
        // Day 1 exists in every month.
        Self(self.0.with_day(1).expect("day 1 is always valid"))
    }

    /// Returns the first day of the month after this date's month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] past the last representable month.
    pub fn first_of_next_month(self) -> Result<Self, CalendarError> {
        self.first_of_month().add_months(1)
    }

    /// Signed number of days from `self` to `other` (`other - self`).
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| CalendarError::Parse {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = Date::new(2016, 1, 4).unwrap();
        assert_eq!(date.year(), 2016);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 4);
    }

    #[test]
    fn new_leap_day() {
        assert!(Date::new(2016, 2, 29).is_ok());
        assert_eq!(
            Date::new(2015, 2, 29).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2015,
                month: 2,
                day: 29,
            }
        );
    }

    #[test]
    fn new_invalid_month() {
        assert!(matches!(
            Date::new(2016, 13, 1),
            Err(CalendarError::InvalidDate { month: 13, .. })
        ));
    }

    #[test]
    fn add_days_across_year() {
        let date = Date::new(2016, 12, 30).unwrap();
        assert_eq!(date.add_days(3).unwrap(), Date::new(2017, 1, 2).unwrap());
    }

    #[test]
    fn add_days_negative() {
        let date = Date::new(2016, 3, 1).unwrap();
        assert_eq!(date.add_days(-1).unwrap(), Date::new(2016, 2, 29).unwrap());
    }

    #[test]
    fn add_days_overflow() {
        let date = Date::new(2016, 1, 1).unwrap();
        assert!(matches!(
            date.add_days(i64::MAX),
            Err(CalendarError::Overflow { .. })
        ));
    }

    #[test]
    fn add_months_simple() {
        let date = Date::new(2016, 1, 4).unwrap();
        assert_eq!(date.add_months(26).unwrap(), Date::new(2018, 3, 4).unwrap());
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        let jan31 = Date::new(2016, 1, 31).unwrap();
        assert_eq!(jan31.add_months(1).unwrap(), Date::new(2016, 2, 29).unwrap());

        let jan31 = Date::new(2015, 1, 31).unwrap();
        assert_eq!(jan31.add_months(1).unwrap(), Date::new(2015, 2, 28).unwrap());

        let mar31 = Date::new(2016, 3, 31).unwrap();
        assert_eq!(mar31.add_months(1).unwrap(), Date::new(2016, 4, 30).unwrap());
    }

    #[test]
    fn first_of_month() {
        let date = Date::new(2016, 2, 17).unwrap();
        assert_eq!(date.first_of_month(), Date::new(2016, 2, 1).unwrap());
    }

    #[test]
    fn first_of_next_month_december() {
        let date = Date::new(2016, 12, 25).unwrap();
        assert_eq!(
            date.first_of_next_month().unwrap(),
            Date::new(2017, 1, 1).unwrap()
        );
    }

    #[test]
    fn days_until_is_signed() {
        let a = Date::new(2016, 2, 1).unwrap();
        let b = Date::new(2016, 3, 1).unwrap();
        assert_eq!(a.days_until(b), 29);
        assert_eq!(b.days_until(a), -29);
        assert_eq!(a.days_until(a), 0);
    }

    #[test]
    fn ord_chronological() {
        let dec31 = Date::new(2015, 12, 31).unwrap();
        let jan1 = Date::new(2016, 1, 1).unwrap();
        assert!(dec31 < jan1);
    }

    #[test]
    fn display_iso() {
        let date = Date::new(2016, 1, 4).unwrap();
        assert_eq!(date.to_string(), "2016-01-04");
    }

    #[test]
    fn from_str_valid() {
        let date: Date = "2016-01-04".parse().unwrap();
        assert_eq!(date, Date::new(2016, 1, 4).unwrap());
    }

    #[test]
    fn from_str_invalid() {
        let err = "2016-02-30".parse::<Date>().unwrap_err();
        assert!(matches!(err, CalendarError::Parse { ref input, .. } if input == "2016-02-30"));
        assert!("not a date".parse::<Date>().is_err());
    }

    #[test]
    fn serde_as_iso_string() {
        let date = Date::new(2016, 1, 4).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2016-01-04\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Date>();
    }
}
