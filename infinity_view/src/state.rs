// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view state machine: zoom in, zoom out, pan, and hover.
//!
//! ## Usage
//!
//! 1) Build a [`ViewState`] at a starting segment (usually a year).
//! 2) On a click or wheel step, hit test the ring and call
//!    [`ViewState::zoom_in`] with the segment index.
//! 3) Call [`ViewState::zoom_out`] to step back towards the year ring.
//! 4) Take a [`ViewState::snapshot`] for each redraw.
//!
//! Transitions either succeed with [`Transition::Changed`], report
//! [`Transition::AtBoundary`] when there is no finer or coarser level, or
//! fail with a [`ViewError`] and leave the state untouched.

use chrono::{Datelike, Days, Months, NaiveDate, TimeDelta, Timelike};
use infinity_time::{TimeError, calendar_date, monday_of};
use tracing::{debug, trace};

use crate::{Segment, ViewError, ViewLevel};

/// Outcome of a transition request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The selection moved.
    ///
    /// A host that animates transitions can interpolate between the two.
    Changed {
        /// Segment before the transition.
        from: Segment,
        /// Segment after the transition.
        to: Segment,
    },
    /// Already at the finest (or coarsest) level; nothing changed.
    AtBoundary,
}

impl Transition {
    /// Whether the selection moved.
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Direction for [`ViewState::pan`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanDirection {
    /// One unit back in time.
    Previous,
    /// One unit forward in time.
    Next,
}

/// Everything a renderer needs, detached from the live state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ViewSnapshot {
    /// Current selection; its level is the active ring.
    pub segment: Segment,
    /// Segment under the pointer on the active ring.
    pub hovered: Option<u32>,
    /// Generation of the selection this snapshot was taken from.
    pub generation: u64,
}

impl ViewSnapshot {
    /// The active ring level.
    pub const fn view(&self) -> ViewLevel {
        self.segment.level()
    }
}

/// The current view: active level, selection, and hover.
///
/// The active level is always `segment.level()`, so the two can never
/// disagree. Every change of selection bumps [`generation`](Self::generation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    segment: Segment,
    hovered: Option<u32>,
    generation: u64,
}

impl ViewState {
    /// Start at `segment`.
    pub fn new(segment: Segment) -> Self {
        Self {
            segment,
            hovered: None,
            generation: 0,
        }
    }

    /// Start on the year ring of the current local year.
    pub fn current_year() -> Self {
        let year = chrono::Local::now().date_naive().year();
        Self::new(Segment::Year { year })
    }

    /// Current selection.
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Active ring level.
    pub fn level(&self) -> ViewLevel {
        self.segment.level()
    }

    /// Segment under the pointer, if any.
    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    /// Counter bumped on every change of selection.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of segments on the active ring.
    pub fn segment_count(&self) -> u32 {
        self.segment.segment_count()
    }

    /// Owned copy of the state for rendering.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            segment: self.segment,
            hovered: self.hovered,
            generation: self.generation,
        }
    }

    /// Set the hovered segment; returns `true` if it changed.
    pub fn set_hovered_segment(&mut self, hovered: Option<u32>) -> bool {
        if self.hovered == hovered {
            return false;
        }
        trace!(?hovered, "hover");
        self.hovered = hovered;
        true
    }

    /// Zoom into segment `index` of the active ring.
    ///
    /// | from  | to    | selection                                        |
    /// |-------|-------|--------------------------------------------------|
    /// | Year  | Month | month `index`                                    |
    /// | Month | Week  | the week containing day `index + 1`              |
    /// | Week  | Day   | the Monday of the week plus `index` days         |
    /// | Day   | Hour  | hour `index`                                     |
    ///
    /// At the hour ring this is [`Transition::AtBoundary`].
    pub fn zoom_in(&mut self, index: u32) -> Result<Transition, ViewError> {
        if self.level() == ViewLevel::Hour {
            return Ok(Transition::AtBoundary);
        }
        self.check_index(index)?;
        let next = match self.segment {
            Segment::Year { year } => Segment::month(year, index)?,
            Segment::Month { year, month } => {
                Segment::week_of(calendar_date(year, month, index + 1)?)
            }
            Segment::Week { date, .. } => Segment::day_of(add_days(monday_of(date), index)?),
            Segment::Day { date, .. } => Segment::hour_of(date, index)?,
            Segment::Hour { .. } => return Ok(Transition::AtBoundary),
        };
        Ok(self.replace("zoom in", next))
    }

    /// From the month ring, open day `index` directly, skipping the week ring.
    pub fn open_day(&mut self, index: u32) -> Result<Transition, ViewError> {
        let Segment::Month { year, month } = self.segment else {
            return Err(ViewError::WrongLevel {
                operation: "open day",
                level: self.level(),
            });
        };
        self.check_index(index)?;
        let next = Segment::day_of(calendar_date(year, month, index + 1)?);
        Ok(self.replace("open day", next))
    }

    /// Zoom out one level.
    ///
    /// The finest field is dropped and the rest are re-derived from the date
    /// where one exists. At the year ring this is [`Transition::AtBoundary`].
    pub fn zoom_out(&mut self) -> Transition {
        let next = match self.segment {
            Segment::Year { .. } => return Transition::AtBoundary,
            Segment::Month { year, .. } => Segment::Year { year },
            Segment::Week { date, .. } => Segment::month_of(date),
            Segment::Day { date, .. } => Segment::week_of(date),
            Segment::Hour { date, .. } => Segment::day_of(date),
        };
        self.replace("zoom out", next)
    }

    /// Move the selection one unit in `direction` at the active level.
    pub fn pan(&mut self, direction: PanDirection) -> Result<Transition, ViewError> {
        let forward = direction == PanDirection::Next;
        let next = match self.segment {
            Segment::Year { year } => {
                let year = if forward {
                    year.checked_add(1)
                } else {
                    year.checked_sub(1)
                };
                Segment::year(year.ok_or_else(|| out_of_range("year"))?)?
            }
            Segment::Month { year, month } => {
                let first = calendar_date(year, month, 1)?;
                let shifted = if forward {
                    first.checked_add_months(Months::new(1))
                } else {
                    first.checked_sub_months(Months::new(1))
                };
                Segment::month_of(shifted.ok_or_else(|| out_of_range("month"))?)
            }
            Segment::Week { date, .. } => Segment::week_of(shift_days(date, 7, forward)?),
            Segment::Day { date, .. } => Segment::day_of(shift_days(date, 1, forward)?),
            Segment::Hour { .. } => {
                let delta = if forward {
                    TimeDelta::hours(1)
                } else {
                    TimeDelta::hours(-1)
                };
                let moved = self
                    .segment
                    .datetime()
                    .and_then(|at| at.checked_add_signed(delta))
                    .ok_or_else(|| out_of_range("hour"))?;
                Segment::hour_of(moved.date(), moved.hour())?
            }
        };
        Ok(self.replace("pan", next))
    }

    /// Jump to the year ring of `year`.
    pub fn go_to_year(&mut self, year: i32) -> Result<Transition, ViewError> {
        let next = Segment::year(year)?;
        if next == self.segment {
            return Ok(Transition::AtBoundary);
        }
        Ok(self.replace("go to year", next))
    }

    fn check_index(&self, index: u32) -> Result<(), ViewError> {
        let count = self.segment.segment_count();
        if index >= count {
            return Err(ViewError::SegmentOutOfRange {
                level: self.level(),
                index,
                count,
            });
        }
        Ok(())
    }

    fn replace(&mut self, action: &'static str, next: Segment) -> Transition {
        let from = core::mem::replace(&mut self.segment, next);
        self.hovered = None;
        self.generation += 1;
        debug!(
            action,
            from = %from,
            to = %next,
            level = %next.level(),
            generation = self.generation,
            "view transition"
        );
        Transition::Changed { from, to: next }
    }
}

fn out_of_range(what: &'static str) -> ViewError {
    TimeError::InvalidArgument {
        what,
        value: 0,
        range: "supported calendar dates",
    }
    .into()
}

fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate, ViewError> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| out_of_range("day"))
}

fn shift_days(date: NaiveDate, days: u64, forward: bool) -> Result<NaiveDate, ViewError> {
    let shifted = if forward {
        date.checked_add_days(Days::new(days))
    } else {
        date.checked_sub_days(Days::new(days))
    };
    shifted.ok_or_else(|| out_of_range("day"))
}
