// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event store port.

use async_trait::async_trait;
use chrono::{Days, NaiveDate, NaiveDateTime};
use infinity_time::{TimeError, calendar_date, days_in_month, days_in_year};

use crate::{CalendarEvent, StoreResult};

/// Half-open `[start, end)` window covering `date`.
pub fn day_window(date: NaiveDate) -> StoreResult<(NaiveDateTime, NaiveDateTime)> {
    span(date, 1)
}

/// Half-open window covering month `month` (0-based) of `year`.
pub fn month_window(year: i32, month: u32) -> StoreResult<(NaiveDateTime, NaiveDateTime)> {
    span(calendar_date(year, month, 1)?, u64::from(days_in_month(year, month)?))
}

/// Half-open window covering `year`.
pub fn year_window(year: i32) -> StoreResult<(NaiveDateTime, NaiveDateTime)> {
    span(calendar_date(year, 0, 1)?, u64::from(days_in_year(year)))
}

fn span(first: NaiveDate, days: u64) -> StoreResult<(NaiveDateTime, NaiveDateTime)> {
    let last = first
        .checked_add_days(Days::new(days))
        .ok_or(TimeError::InvalidArgument {
            what: "date",
            value: 0,
            range: "supported calendar dates",
        })?;
    Ok((first.and_time(chrono::NaiveTime::MIN), last.and_time(chrono::NaiveTime::MIN)))
}

/// Storage for calendar events, keyed by id and queried by time window.
///
/// Every query returns the events overlapping a half-open window, ordered
/// by start time. The per-date, per-month, and per-year queries default to
/// [`events_for_range`](Self::events_for_range) over the matching window.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Events overlapping `[start, end)`.
    async fn events_for_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> StoreResult<Vec<CalendarEvent>>;

    /// Every stored event.
    async fn all_events(&self) -> StoreResult<Vec<CalendarEvent>>;

    /// Insert a new event, returning its id; fails if the id is taken.
    async fn add_event(&self, event: CalendarEvent) -> StoreResult<String>;

    /// Replace the event with id `id`; fails if there is none.
    async fn update_event(&self, id: &str, event: CalendarEvent) -> StoreResult<()>;

    /// Delete the event with id `id`, returning it.
    async fn remove_event(&self, id: &str) -> StoreResult<CalendarEvent>;

    /// Delete every event.
    async fn clear(&self) -> StoreResult<()>;

    /// Events overlapping the day `date`.
    async fn events_for_date(&self, date: NaiveDate) -> StoreResult<Vec<CalendarEvent>> {
        let (start, end) = day_window(date)?;
        self.events_for_range(start, end).await
    }

    /// Events overlapping month `month` (0-based) of `year`.
    async fn events_for_month(&self, year: i32, month: u32) -> StoreResult<Vec<CalendarEvent>> {
        let (start, end) = month_window(year, month)?;
        self.events_for_range(start, end).await
    }

    /// Events overlapping `year`.
    async fn events_for_year(&self, year: i32) -> StoreResult<Vec<CalendarEvent>> {
        let (start, end) = year_window(year)?;
        self.events_for_range(start, end).await
    }
}
