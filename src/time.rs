//! Day and hour counts since the 1985-01-01 epoch.
//!
//! Daily records store whole days since the epoch, hourly records whole
//! hours. The conversions here are plain Gregorian arithmetic: no time
//! zones, no leap seconds. [`CalendarDate`] wraps a `(year, month, day)`
//! triple for callers that want a value type instead of a tuple.
//!
//! Dates before the epoch are outside the contract. They don't panic, the
//! arithmetic simply wraps.

use std::fmt;

use crate::constants::EPOCH_YEAR;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Length of `month` (1-12) in `year`. Returns 0 for any other month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[month as usize - 1],
        _ => 0,
    }
}

/// Days elapsed between the epoch and `year-month-day`.
pub fn date_to_days(year: i32, month: u32, day: u32) -> u32 {
    let mut days = 0u32;
    for y in EPOCH_YEAR..year {
        days = days.wrapping_add(days_in_year(y));
    }
    for m in 1..month {
        days = days.wrapping_add(days_in_month(year, m));
    }
    days.wrapping_add(day.wrapping_sub(1))
}

/// Inverse of [`date_to_days`]: `(year, month, day)` for a day count.
pub fn days_to_date(days: u32) -> (i32, u32, u32) {
    let mut year = EPOCH_YEAR;
    let mut remaining = days;
    while remaining >= days_in_year(year) {
        remaining -= days_in_year(year);
        year += 1;
    }

    let mut month = 1;
    while remaining >= days_in_month(year, month) {
        remaining -= days_in_month(year, month);
        month += 1;
    }

    (year, month, remaining + 1)
}

/// Hours elapsed between the epoch and `year-month-day hour:00`.
///
/// `hour` is not range-checked; 24 lands on midnight of the next day.
pub fn datetime_to_hours(year: i32, month: u32, day: u32, hour: u32) -> u32 {
    date_to_days(year, month, day)
        .wrapping_mul(24)
        .wrapping_add(hour)
}

/// Inverse of [`datetime_to_hours`]: `(year, month, day, hour)`.
pub fn hours_to_datetime(hours: u32) -> (i32, u32, u32, u32) {
    let (year, month, day) = days_to_date(hours / 24);
    (year, month, day, hours % 24)
}

/// A calendar date on or after the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32, // 1-12
    pub day: u32,   // 1-31
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// 1985-01-01.
    pub fn epoch() -> Self {
        Self::new(EPOCH_YEAR, 1, 1)
    }

    /// Date for a daily-record timestamp.
    pub fn from_days(days: u32) -> Self {
        let (year, month, day) = days_to_date(days);
        Self { year, month, day }
    }

    /// Daily-record timestamp for this date.
    pub fn to_days(self) -> u32 {
        date_to_days(self.year, self.month, self.day)
    }

    /// Hourly-record timestamp for `hour` on this date.
    pub fn to_hours(self, hour: u32) -> u32 {
        datetime_to_hours(self.year, self.month, self.day, hour)
    }

    /// True for a real Gregorian date no earlier than the epoch.
    pub fn is_valid(self) -> bool {
        self.year >= EPOCH_YEAR
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self::epoch()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use chrono::{Datelike, NaiveDate};

    use super::CalendarDate;

    impl CalendarDate {
        /// `None` when the triple isn't a real calendar date.
        pub fn to_naive_date(self) -> Option<NaiveDate> {
            NaiveDate::from_ymd_opt(self.year, self.month, self.day)
        }
    }

    impl From<NaiveDate> for CalendarDate {
        fn from(date: NaiveDate) -> Self {
            Self::new(date.year(), date.month(), date.day())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(1988));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1985));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1988, 2), 29);
        assert_eq!(days_in_month(1989, 2), 28);
        assert_eq!(days_in_month(1989, 4), 30);
        assert_eq!(days_in_month(1989, 12), 31);
        assert_eq!(days_in_month(1989, 0), 0);
        assert_eq!(days_in_month(1989, 13), 0);
    }

    #[test]
    fn test_epoch_is_day_zero() {
        assert_eq!(date_to_days(1985, 1, 1), 0);
        assert_eq!(days_to_date(0), (1985, 1, 1));
    }

    #[test]
    fn test_year_boundaries() {
        assert_eq!(date_to_days(1985, 12, 31), 364);
        assert_eq!(date_to_days(1986, 1, 1), 365);
        // 1988 is a leap year: 1095 days for 1985-87, then Jan + 29-day Feb
        assert_eq!(date_to_days(1988, 2, 29), 1154);
        assert_eq!(date_to_days(1988, 3, 1), 1155);
        assert_eq!(date_to_days(1989, 1, 1), 1461);
    }

    #[test]
    fn test_days_to_date_leap_day() {
        assert_eq!(days_to_date(1154), (1988, 2, 29));
        assert_eq!(days_to_date(1155), (1988, 3, 1));
        assert_eq!(days_to_date(1460), (1988, 12, 31));
    }

    #[test]
    fn test_roundtrip_every_day_1985_to_2040() {
        for year in 1985..=2040 {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let days = date_to_days(year, month, day);
                    assert_eq!(
                        days_to_date(days),
                        (year, month, day),
                        "{year}-{month}-{day} -> {days}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_consecutive_days_are_consecutive() {
        let mut expected = 0;
        for year in 1985..=2000 {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    assert_eq!(date_to_days(year, month, day), expected);
                    expected += 1;
                }
            }
        }
    }

    #[test]
    fn test_datetime_to_hours() {
        assert_eq!(datetime_to_hours(1985, 1, 1, 0), 0);
        assert_eq!(datetime_to_hours(1985, 1, 1, 23), 23);
        assert_eq!(datetime_to_hours(1985, 1, 2, 0), 24);
        assert_eq!(datetime_to_hours(1986, 1, 1, 6), 365 * 24 + 6);
        // out-of-range hour rolls into the next day rather than failing
        assert_eq!(
            datetime_to_hours(1985, 1, 1, 24),
            datetime_to_hours(1985, 1, 2, 0)
        );
    }

    #[test]
    fn test_hours_to_datetime() {
        assert_eq!(hours_to_datetime(0), (1985, 1, 1, 0));
        assert_eq!(hours_to_datetime(1155 * 24 + 13), (1988, 3, 1, 13));
        let hours = datetime_to_hours(2020, 2, 29, 17);
        assert_eq!(hours_to_datetime(hours), (2020, 2, 29, 17));
    }

    #[test]
    fn test_pre_epoch_does_not_panic() {
        // Outside the contract, but must not panic in debug builds.
        let _ = date_to_days(1984, 12, 31);
        let _ = date_to_days(1985, 1, 0);
        let _ = datetime_to_hours(1900, 1, 0, 5);
    }

    #[test]
    fn test_calendar_date() {
        let date = CalendarDate::new(1988, 3, 1);
        assert_eq!(date.to_days(), 1155);
        assert_eq!(CalendarDate::from_days(1155), date);
        assert_eq!(date.to_hours(2), 1155 * 24 + 2);
        assert_eq!(date.to_string(), "1988-03-01");
        assert_eq!(CalendarDate::default(), CalendarDate::epoch());
    }

    #[test]
    fn test_calendar_date_validity() {
        assert!(CalendarDate::new(1988, 2, 29).is_valid());
        assert!(!CalendarDate::new(1989, 2, 29).is_valid());
        assert!(!CalendarDate::new(1984, 6, 1).is_valid());
        assert!(!CalendarDate::new(1990, 13, 1).is_valid());
        assert!(!CalendarDate::new(1990, 1, 0).is_valid());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_agrees_with_chrono() {
        use chrono::NaiveDate;

        let epoch = NaiveDate::from_ymd_opt(1985, 1, 1).unwrap();
        let mut date = epoch;
        let end = NaiveDate::from_ymd_opt(2035, 12, 31).unwrap();
        while date <= end {
            let ours = CalendarDate::from(date);
            let expected = (date - epoch).num_days() as u32;
            assert_eq!(ours.to_days(), expected, "{date}");
            assert_eq!(CalendarDate::from_days(expected).to_naive_date(), Some(date));
            date = date.succ_opt().unwrap();
        }
    }
}
