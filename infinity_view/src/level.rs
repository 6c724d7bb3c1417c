// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The zoom levels of the calendar.

use core::fmt;

/// Which ring is active.
///
/// Levels are totally ordered from coarse to fine; `Year < Hour`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewLevel {
    /// Twelve months of one year.
    Year,
    /// The days of one month.
    Month,
    /// Seven days of one ISO week.
    Week,
    /// Twenty-four hours of one day.
    Day,
    /// Sixty minutes of one hour.
    Hour,
}

impl ViewLevel {
    /// All levels, coarsest first.
    pub const ALL: [Self; 5] = [Self::Year, Self::Month, Self::Week, Self::Day, Self::Hour];

    /// The next finer level, or `None` at [`ViewLevel::Hour`].
    pub const fn finer(self) -> Option<Self> {
        match self {
            Self::Year => Some(Self::Month),
            Self::Month => Some(Self::Week),
            Self::Week => Some(Self::Day),
            Self::Day => Some(Self::Hour),
            Self::Hour => None,
        }
    }

    /// The next coarser level, or `None` at [`ViewLevel::Year`].
    pub const fn coarser(self) -> Option<Self> {
        match self {
            Self::Year => None,
            Self::Month => Some(Self::Year),
            Self::Week => Some(Self::Month),
            Self::Day => Some(Self::Week),
            Self::Hour => Some(Self::Day),
        }
    }

    /// Lowercase name, as used in logs and configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

impl fmt::Display for ViewLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
