// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selected time unit, one variant per level.

use core::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use infinity_time::{
    DAYS_PER_WEEK, TimeError, calendar_date, days_in_month, iso_week_number, weekday_index,
};

use crate::{ViewError, ViewLevel};

/// Segments on the year ring.
pub const MONTHS_PER_YEAR: u32 = 12;
/// Segments on the day ring.
pub const HOURS_PER_DAY: u32 = 24;
/// Segments on the hour ring.
pub const MINUTES_PER_HOUR: u32 = 60;

/// The selection at the active level.
///
/// Each variant carries exactly the fields that exist at its level. Variants
/// are `#[non_exhaustive]` so they can only be built through the
/// constructors below, which derive every field from the date. A `Day` or
/// `Hour` segment is therefore always self-consistent:
/// `month == date.month0()`, `week == iso_week(date) - 1`, and
/// `day == weekday_index(date)`.
///
/// Months, weeks, and days are 0-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A whole year.
    #[non_exhaustive]
    Year {
        /// Calendar year.
        year: i32,
    },
    /// One month of a year.
    #[non_exhaustive]
    Month {
        /// Calendar year.
        year: i32,
        /// Month, `0..=11`.
        month: u32,
    },
    /// The ISO week containing `date`.
    #[non_exhaustive]
    Week {
        /// Calendar year of `date`.
        year: i32,
        /// Month of `date`.
        month: u32,
        /// ISO week of `date`, minus one.
        week: u32,
        /// Anchor date inside the week.
        date: NaiveDate,
    },
    /// One day.
    #[non_exhaustive]
    Day {
        /// Calendar year of `date`.
        year: i32,
        /// Month of `date`.
        month: u32,
        /// ISO week of `date`, minus one.
        week: u32,
        /// Weekday of `date`, Monday = 0.
        day: u32,
        /// The day.
        date: NaiveDate,
    },
    /// One hour of one day.
    #[non_exhaustive]
    Hour {
        /// Calendar year of `date`.
        year: i32,
        /// Month of `date`.
        month: u32,
        /// ISO week of `date`, minus one.
        week: u32,
        /// Weekday of `date`, Monday = 0.
        day: u32,
        /// The day.
        date: NaiveDate,
        /// Hour of the day, `0..=23`.
        hour: u32,
    },
}

impl Segment {
    /// The whole of `year`.
    ///
    /// Fails if the year is outside the supported calendar.
    pub fn year(year: i32) -> Result<Self, ViewError> {
        calendar_date(year, 0, 1)?;
        calendar_date(year, 11, 31)?;
        Ok(Self::Year { year })
    }

    /// Month `month` (0-based) of `year`.
    pub fn month(year: i32, month: u32) -> Result<Self, ViewError> {
        calendar_date(year, month, 1)?;
        days_in_month(year, month)?;
        Ok(Self::Month { year, month })
    }

    /// The month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        Self::Month {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The week containing `date`, anchored at `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        Self::Week {
            year: date.year(),
            month: date.month0(),
            week: iso_week_number(date) - 1,
            date,
        }
    }

    /// The day `date`.
    pub fn day_of(date: NaiveDate) -> Self {
        Self::Day {
            year: date.year(),
            month: date.month0(),
            week: iso_week_number(date) - 1,
            day: weekday_index(date),
            date,
        }
    }

    /// Hour `hour` of `date`.
    pub fn hour_of(date: NaiveDate, hour: u32) -> Result<Self, ViewError> {
        if hour >= HOURS_PER_DAY {
            return Err(TimeError::InvalidArgument {
                what: "hour",
                value: i64::from(hour),
                range: "0..=23",
            }
            .into());
        }
        Ok(Self::Hour {
            year: date.year(),
            month: date.month0(),
            week: iso_week_number(date) - 1,
            day: weekday_index(date),
            date,
            hour,
        })
    }

    /// The level this segment belongs to.
    pub const fn level(&self) -> ViewLevel {
        match self {
            Self::Year { .. } => ViewLevel::Year,
            Self::Month { .. } => ViewLevel::Month,
            Self::Week { .. } => ViewLevel::Week,
            Self::Day { .. } => ViewLevel::Day,
            Self::Hour { .. } => ViewLevel::Hour,
        }
    }

    /// Calendar year; present at every level.
    pub const fn year_value(&self) -> i32 {
        match *self {
            Self::Year { year }
            | Self::Month { year, .. }
            | Self::Week { year, .. }
            | Self::Day { year, .. }
            | Self::Hour { year, .. } => year,
        }
    }

    /// 0-based month, from [`ViewLevel::Month`] down.
    pub const fn month_value(&self) -> Option<u32> {
        match *self {
            Self::Year { .. } => None,
            Self::Month { month, .. }
            | Self::Week { month, .. }
            | Self::Day { month, .. }
            | Self::Hour { month, .. } => Some(month),
        }
    }

    /// 0-based ISO week, from [`ViewLevel::Week`] down.
    pub const fn week_value(&self) -> Option<u32> {
        match *self {
            Self::Year { .. } | Self::Month { .. } => None,
            Self::Week { week, .. } | Self::Day { week, .. } | Self::Hour { week, .. } => {
                Some(week)
            }
        }
    }

    /// 0-based weekday (Monday = 0), from [`ViewLevel::Day`] down.
    pub const fn day_value(&self) -> Option<u32> {
        match *self {
            Self::Day { day, .. } | Self::Hour { day, .. } => Some(day),
            _ => None,
        }
    }

    /// Hour of the day, at [`ViewLevel::Hour`] only.
    pub const fn hour_value(&self) -> Option<u32> {
        match *self {
            Self::Hour { hour, .. } => Some(hour),
            _ => None,
        }
    }

    /// The date, from [`ViewLevel::Week`] down.
    pub const fn date(&self) -> Option<NaiveDate> {
        match *self {
            Self::Year { .. } | Self::Month { .. } => None,
            Self::Week { date, .. } | Self::Day { date, .. } | Self::Hour { date, .. } => {
                Some(date)
            }
        }
    }

    /// `date` at `hour:00`, at [`ViewLevel::Hour`] only.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match *self {
            Self::Hour { date, hour, .. } => {
                NaiveTime::from_hms_opt(hour, 0, 0).map(|time| date.and_time(time))
            }
            _ => None,
        }
    }

    /// Number of segments on the ring this segment is shown as.
    ///
    /// 12 months, the days of the month, 7 weekdays, 24 hours, or 60 minutes.
    pub fn segment_count(&self) -> u32 {
        match *self {
            Self::Year { .. } => MONTHS_PER_YEAR,
            // Month segments are only built for months whose length is known.
            Self::Month { year, month } => days_in_month(year, month).unwrap_or(31),
            Self::Week { .. } => DAYS_PER_WEEK,
            Self::Day { .. } => HOURS_PER_DAY,
            Self::Hour { .. } => MINUTES_PER_HOUR,
        }
    }
}

/// Number of segments on the `view` ring for `segment`.
///
/// Fails with [`ViewError::LevelMismatch`] when `segment` does not belong to
/// `view`.
pub fn segment_count(view: ViewLevel, segment: &Segment) -> Result<u32, ViewError> {
    if segment.level() != view {
        return Err(ViewError::LevelMismatch {
            view,
            segment: segment.level(),
        });
    }
    Ok(segment.segment_count())
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Year { year } => write!(f, "{year}"),
            Self::Month { year, month } => write!(f, "{year}-{:02}", month + 1),
            Self::Week { week, date, .. } => write!(f, "{date} (week {})", week + 1),
            Self::Day { date, .. } => write!(f, "{date}"),
            Self::Hour { date, hour, .. } => write!(f, "{date} {hour}:00"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_per_level() {
        assert_eq!(Segment::year(2024).unwrap().segment_count(), 12);
        assert_eq!(Segment::month(2024, 1).unwrap().segment_count(), 29);
        assert_eq!(Segment::month(2023, 1).unwrap().segment_count(), 28);
        assert_eq!(Segment::month(2024, 11).unwrap().segment_count(), 31);
        assert_eq!(Segment::week_of(ymd(2024, 3, 5)).segment_count(), 7);
        assert_eq!(Segment::day_of(ymd(2024, 3, 5)).segment_count(), 24);
        assert_eq!(
            Segment::hour_of(ymd(2024, 3, 5), 14)
                .unwrap()
                .segment_count(),
            60
        );
    }

    #[test]
    fn count_checks_level() {
        let month = Segment::month(2024, 2).unwrap();
        assert_eq!(segment_count(ViewLevel::Month, &month), Ok(31));
        assert_eq!(
            segment_count(ViewLevel::Day, &month),
            Err(ViewError::LevelMismatch {
                view: ViewLevel::Day,
                segment: ViewLevel::Month,
            })
        );
    }

    #[test]
    fn day_fields_follow_date() {
        let segment = Segment::day_of(ymd(2023, 1, 1));
        assert_eq!(segment.year_value(), 2023);
        assert_eq!(segment.month_value(), Some(0));
        // 2023-01-01 is in ISO week 52 of 2022.
        assert_eq!(segment.week_value(), Some(51));
        assert_eq!(segment.day_value(), Some(6));
    }

    #[test]
    fn hour_datetime() {
        let segment = Segment::hour_of(ymd(2024, 1, 1), 14).unwrap();
        assert_eq!(
            segment.datetime(),
            Some(ymd(2024, 1, 1).and_hms_opt(14, 0, 0).unwrap())
        );
        assert!(Segment::hour_of(ymd(2024, 1, 1), 24).is_err());
    }

    #[test]
    fn bad_month_is_rejected() {
        assert!(Segment::month(2024, 12).is_err());
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Segment::month(2024, 2).unwrap().to_string(), "2024-03");
        assert_eq!(
            Segment::hour_of(ymd(2024, 3, 5), 9).unwrap().to_string(),
            "2024-03-05 9:00"
        );
    }
}
