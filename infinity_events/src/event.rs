// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The calendar event record.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::{StoreError, StoreResult};

/// A timed entry shown on the calendar.
///
/// Times are local wall-clock times. `end` is never before `start`; use
/// [`CalendarEvent::new`] or [`CalendarEvent::validate`] to enforce it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique key in the store.
    pub id: String,
    /// Label drawn on the day ring.
    pub title: String,
    /// Start (inclusive).
    pub start: NaiveDateTime,
    /// End (exclusive).
    pub end: NaiveDateTime,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project the entry was tracked against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Position among entries of the same day, as recorded by the tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl CalendarEvent {
    /// Create and validate an event.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> StoreResult<Self> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            description: None,
            project_id: None,
            order: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a project id.
    #[must_use]
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Check the invariants a store relies on.
    pub fn validate(&self) -> StoreResult<()> {
        if self.id.is_empty() {
            return Err(StoreError::InvalidEvent {
                id: self.id.clone(),
                reason: "id is empty".into(),
            });
        }
        if self.end < self.start {
            return Err(StoreError::InvalidEvent {
                id: self.id.clone(),
                reason: format!("end {} is before start {}", self.end, self.start),
            });
        }
        Ok(())
    }

    /// Length of the event.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether the event touches the half-open window `[start, end)`.
    ///
    /// Zero-length events count when their instant falls inside the window.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        if self.start == self.end {
            return start <= self.start && self.start < end;
        }
        self.start < end && self.end > start
    }

    /// The part of the event inside `[start, end)`, or `None` if it misses.
    pub fn clipped_to(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.overlaps(start, end)
            .then(|| (self.start.max(start), self.end.min(end)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn rejects_backwards_event() {
        let err = CalendarEvent::new("1", "Standup", at(5, 10), at(5, 9)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidEvent { .. }));
        assert!(CalendarEvent::new("", "x", at(5, 9), at(5, 10)).is_err());
    }

    #[test]
    fn overlap_is_half_open() {
        let event = CalendarEvent::new("1", "Lunch", at(5, 12), at(5, 13)).unwrap();
        assert!(event.overlaps(at(5, 0), at(6, 0)));
        assert!(!event.overlaps(at(5, 13), at(5, 14)));
        assert!(!event.overlaps(at(5, 11), at(5, 12)));
        assert_eq!(event.duration(), TimeDelta::hours(1));
    }

    #[test]
    fn instant_event_overlaps_its_window() {
        let event = CalendarEvent::new("1", "Ping", at(5, 12), at(5, 12)).unwrap();
        assert!(event.overlaps(at(5, 12), at(5, 13)));
        assert!(!event.overlaps(at(5, 11), at(5, 12)));
    }

    #[test]
    fn clipping_to_a_day() {
        let event = CalendarEvent::new("1", "Night shift", at(5, 22), at(6, 6)).unwrap();
        assert_eq!(event.clipped_to(at(5, 0), at(6, 0)), Some((at(5, 22), at(6, 0))));
        assert_eq!(event.clipped_to(at(6, 0), at(7, 0)), Some((at(6, 0), at(6, 6))));
        assert_eq!(event.clipped_to(at(7, 0), at(8, 0)), None);
    }
}
