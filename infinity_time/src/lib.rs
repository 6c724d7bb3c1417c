// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinity_time --heading-base-level=0

//! Infinity Time: calendar arithmetic for the radial calendar.
//!
//! This crate holds the small set of pure functions the ring views are built
//! on: month lengths, ISO-8601 week numbers, and the Monday that starts a
//! given ISO week. It has no state and does no I/O.
//!
//! Months are **0-based** (`0` is January) to match segment indices on the
//! year ring. ISO weeks are **1-based** (`1..=53`) as in ISO-8601; the view
//! layer stores 0-based week indices and converts at the boundary.
//!
//! ## Example
//!
//! ```rust
//! use infinity_time::{calendar_date, days_in_month, iso_week_number, start_of_iso_week};
//!
//! assert_eq!(days_in_month(2024, 1).unwrap(), 29);
//!
//! let new_year = calendar_date(2024, 0, 1).unwrap();
//! assert_eq!(iso_week_number(new_year), 1);
//! assert_eq!(start_of_iso_week(2024, 1).unwrap(), new_year);
//! ```
//!
//! Invalid months, weeks, or days fail with [`TimeError::InvalidArgument`];
//! nothing is silently clamped.

mod error;
mod names;

pub use error::TimeError;
pub use names::{month_name, short_month_name, short_weekday_name, weekday_name};

use chrono::{Datelike, Days, NaiveDate};

/// Number of days in a week.
pub const DAYS_PER_WEEK: u32 = 7;

/// Largest ISO week number a year can have.
pub const MAX_ISO_WEEK: u32 = 53;

/// An ISO-8601 week: the week-based year plus the 1-based week number.
///
/// The week-based year differs from the calendar year for a few days around
/// New Year. 2023-01-01 (a Sunday) belongs to week 52 of ISO year 2022.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoWeek {
    /// ISO week-based year.
    pub year: i32,
    /// Week number, `1..=53`.
    pub week: u32,
}

fn check_month(month: u32) -> Result<(), TimeError> {
    if month > 11 {
        return Err(TimeError::InvalidArgument {
            what: "month",
            value: i64::from(month),
            range: "0..=11",
        });
    }
    Ok(())
}

fn check_week(week: u32) -> Result<(), TimeError> {
    if !(1..=MAX_ISO_WEEK).contains(&week) {
        return Err(TimeError::InvalidArgument {
            what: "week",
            value: i64::from(week),
            range: "1..=53",
        });
    }
    Ok(())
}

fn out_of_calendar(year: i32) -> TimeError {
    TimeError::InvalidArgument {
        what: "year",
        value: i64::from(year),
        range: "supported calendar years",
    }
}

/// Build a date from a year, a 0-based month, and a 1-based day of month.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimeError> {
    check_month(month)?;
    let days = days_in_month(year, month)?;
    if !(1..=days).contains(&day) {
        return Err(TimeError::InvalidArgument {
            what: "day",
            value: i64::from(day),
            range: "1..=days in month",
        });
    }
    NaiveDate::from_ymd_opt(year, month + 1, day).ok_or_else(|| out_of_calendar(year))
}

/// Number of days in `month` (0-based) of `year`, `28..=31`.
///
/// Computed as the day before the first of the following month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, TimeError> {
    check_month(month)?;
    let (next_year, next_month) = if month == 11 {
        (year.checked_add(1).ok_or_else(|| out_of_calendar(year))?, 1)
    } else {
        (year, month + 2)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| out_of_calendar(year))
}

/// Number of days in `year`.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 0-based weekday index of `date`, Monday = 0 through Sunday = 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// The ISO week (week-based year and week number) containing `date`.
///
/// The date is shifted to the Thursday of its week; the week number is then
/// `ceil((days since Jan 1 of the Thursday's year + 1) / 7)`.
pub fn iso_week(date: NaiveDate) -> IsoWeek {
    let iso_weekday = i64::from(date.weekday().number_from_monday());
    let mut year = date.year();
    let mut thursday = i64::from(date.ordinal0()) + 4 - iso_weekday;
    if thursday < 0 {
        year -= 1;
        thursday += i64::from(days_in_year(year));
    } else if thursday >= i64::from(days_in_year(year)) {
        thursday -= i64::from(days_in_year(year));
        year += 1;
    }
    let week = (thursday + 1 + 6) / 7;
    IsoWeek {
        year,
        week: u32::try_from(week).unwrap_or(1),
    }
}

/// ISO-8601 week number of `date`, `1..=53`.
///
/// The first week containing a Thursday is week 1, and weeks start on Monday.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    iso_week(date).week
}

/// ISO week-based year of `date`.
pub fn iso_week_year(date: NaiveDate) -> i32 {
    iso_week(date).year
}

/// The Monday that begins ISO week `week` (1-based) of ISO year `year`.
///
/// January 4th is always in week 1, so this steps back from it to that
/// week's Monday and then forward `week - 1` whole weeks.
pub fn start_of_iso_week(year: i32, week: u32) -> Result<NaiveDate, TimeError> {
    check_week(week)?;
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4).ok_or_else(|| out_of_calendar(year))?;
    let back = u64::from(weekday_index(jan4));
    let forward = u64::from((week - 1) * DAYS_PER_WEEK);
    jan4.checked_sub_days(Days::new(back))
        .and_then(|monday| monday.checked_add_days(Days::new(forward)))
        .ok_or_else(|| out_of_calendar(year))
}

/// The Monday that begins the ISO week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    // Only the earliest representable week could fail here.
    date.checked_sub_days(Days::new(u64::from(weekday_index(date))))
        .unwrap_or(date)
}

/// Number of ISO weeks in ISO year `year` (52 or 53).
pub fn iso_weeks_in_year(year: i32) -> u32 {
    // Dec 28th is always in the last ISO week of its year.
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(iso_week_number)
        .unwrap_or(52)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_lengths_follow_gregorian_rules() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2023, 1).unwrap(), 28);
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);
        assert_eq!(days_in_month(2000, 1).unwrap(), 29);
        assert_eq!(days_in_month(2024, 0).unwrap(), 31);
        assert_eq!(days_in_month(2024, 3).unwrap(), 30);
        assert_eq!(days_in_month(2024, 11).unwrap(), 31);
    }

    #[test]
    fn bad_month_is_rejected() {
        let err = days_in_month(2024, 12).unwrap_err();
        assert!(matches!(err, TimeError::InvalidArgument { what: "month", .. }));
    }

    #[test]
    fn bad_week_is_rejected() {
        assert!(start_of_iso_week(2024, 0).is_err());
        assert!(start_of_iso_week(2024, 54).is_err());
        assert!(start_of_iso_week(2024, 53).is_ok());
    }

    #[test]
    fn calendar_date_checks_day_of_month() {
        assert_eq!(calendar_date(2024, 1, 29).unwrap(), ymd(2024, 2, 29));
        assert!(calendar_date(2023, 1, 29).is_err());
        assert!(calendar_date(2023, 0, 0).is_err());
    }

    #[test]
    fn iso_week_examples() {
        // 2024-01-01 is a Monday.
        assert_eq!(iso_week_number(ymd(2024, 1, 1)), 1);
        // 2023-01-01 is a Sunday and belongs to the last week of 2022.
        assert_eq!(iso_week_number(ymd(2023, 1, 1)), 52);
        assert_eq!(iso_week_year(ymd(2023, 1, 1)), 2022);
        // 2020 has 53 ISO weeks.
        assert_eq!(iso_week_number(ymd(2020, 12, 31)), 53);
        // 2024-12-30 is a Monday in week 1 of 2025.
        assert_eq!(
            iso_week(ymd(2024, 12, 30)),
            IsoWeek {
                year: 2025,
                week: 1
            }
        );
    }

    #[test]
    fn week_starts() {
        assert_eq!(start_of_iso_week(2024, 1).unwrap(), ymd(2024, 1, 1));
        assert_eq!(start_of_iso_week(2023, 1).unwrap(), ymd(2023, 1, 2));
        assert_eq!(start_of_iso_week(2021, 1).unwrap(), ymd(2021, 1, 4));
        assert_eq!(start_of_iso_week(2020, 53).unwrap(), ymd(2020, 12, 28));
        assert_eq!(start_of_iso_week(2024, 24).unwrap(), ymd(2024, 6, 10));
    }

    #[test]
    fn monday_of_steps_back() {
        assert_eq!(monday_of(ymd(2024, 6, 15)), ymd(2024, 6, 10));
        assert_eq!(monday_of(ymd(2024, 6, 10)), ymd(2024, 6, 10));
    }

    #[test]
    fn weeks_in_year() {
        assert_eq!(iso_weeks_in_year(2020), 53);
        assert_eq!(iso_weeks_in_year(2024), 52);
        assert_eq!(iso_weeks_in_year(2026), 53);
    }

    #[test]
    fn weekday_indices_start_on_monday() {
        assert_eq!(weekday_index(ymd(2024, 1, 1)), 0);
        assert_eq!(weekday_index(ymd(2024, 1, 7)), 6);
    }
}
