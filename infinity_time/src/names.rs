// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! English month and weekday names used for ring labels.

use crate::TimeError;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn lookup(
    table: &'static [&'static str],
    index: u32,
    what: &'static str,
    range: &'static str,
) -> Result<&'static str, TimeError> {
    table
        .get(index as usize)
        .copied()
        .ok_or(TimeError::InvalidArgument {
            what,
            value: i64::from(index),
            range,
        })
}

/// Full month name for a 0-based month.
pub fn month_name(month: u32) -> Result<&'static str, TimeError> {
    lookup(&MONTHS, month, "month", "0..=11")
}

/// Three-letter month name for a 0-based month.
pub fn short_month_name(month: u32) -> Result<&'static str, TimeError> {
    month_name(month).map(|name| &name[..3])
}

/// Full weekday name for a 0-based weekday index (Monday = 0).
pub fn weekday_name(weekday: u32) -> Result<&'static str, TimeError> {
    lookup(&WEEKDAYS, weekday, "weekday", "0..=6")
}

/// Three-letter weekday name for a 0-based weekday index (Monday = 0).
pub fn short_weekday_name(weekday: u32) -> Result<&'static str, TimeError> {
    weekday_name(weekday).map(|name| &name[..3])
}
