// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Import and export of `{"timeEntries": [...]}` documents.
//!
//! This is the format written by time trackers the calendar reads from:
//!
//! ```json
//! {
//!   "timeEntries": [
//!     {
//!       "id": 17,
//!       "projectId": "p-3",
//!       "start": "2024-03-05T09:00:00.000Z",
//!       "end": "2024-03-05T10:30:00.000Z",
//!       "duration": 5400,
//!       "description": "Design review",
//!       "order": 2
//!     }
//!   ]
//! }
//! ```
//!
//! Ids may be strings or integers. Timestamps may carry an offset, in which
//! case the wall-clock time in that offset is kept, or be plain local
//! `YYYY-MM-DDTHH:MM:SS` values. `duration` is informational; the event
//! length is always `end - start`.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{CalendarEvent, EventStore, StoreError, StoreResult};

const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeEntries {
    time_entries: Vec<TimeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum EntryId {
    Number(i64),
    Text(String),
}

impl EntryId {
    fn into_string(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeEntry {
    id: EntryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    project_id: Option<EntryId>,
    start: String,
    end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order: Option<i64>,
}

fn parse_timestamp(id: &str, raw: &str) -> StoreResult<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, LOCAL_FORMAT).map_err(|err| StoreError::InvalidEvent {
        id: id.to_owned(),
        reason: format!("bad timestamp {raw:?}: {err}"),
    })
}

impl TimeEntry {
    fn into_event(self) -> StoreResult<CalendarEvent> {
        let id = self.id.into_string();
        let start = parse_timestamp(&id, &self.start)?;
        let end = parse_timestamp(&id, &self.end)?;
        let title = self
            .title
            .or_else(|| self.description.clone())
            .unwrap_or_else(|| id.clone());
        let event = CalendarEvent {
            id,
            title,
            start,
            end,
            description: self.description,
            project_id: self.project_id.map(EntryId::into_string),
            order: self.order,
        };
        event.validate()?;
        Ok(event)
    }

    fn from_event(event: &CalendarEvent) -> Self {
        #[allow(
            clippy::cast_precision_loss,
            reason = "durations are far below 2^52 seconds"
        )]
        let duration = event.duration().num_seconds() as f64;
        Self {
            id: EntryId::Text(event.id.clone()),
            project_id: event.project_id.clone().map(EntryId::Text),
            start: event.start.format(LOCAL_FORMAT).to_string(),
            end: event.end.format(LOCAL_FORMAT).to_string(),
            duration: Some(duration),
            title: Some(event.title.clone()),
            description: event.description.clone(),
            order: event.order,
        }
    }
}

/// Parse a time-entry document into events.
///
/// Fails on the first malformed entry; nothing is partially returned.
pub fn parse_time_entries(json: &str) -> StoreResult<Vec<CalendarEvent>> {
    let document: TimeEntries = serde_json::from_str(json)?;
    document
        .time_entries
        .into_iter()
        .map(TimeEntry::into_event)
        .collect()
}

/// Write events as a pretty-printed time-entry document.
pub fn to_time_entries(events: &[CalendarEvent]) -> StoreResult<String> {
    let document = TimeEntries {
        time_entries: events.iter().map(TimeEntry::from_event).collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Replace the contents of `store` with the events in `json`.
///
/// The document is parsed before the store is touched, so a malformed
/// document leaves the store as it was. Returns the number of events added.
pub async fn import_time_entries<S: EventStore + ?Sized>(
    store: &S,
    json: &str,
) -> StoreResult<usize> {
    let events = parse_time_entries(json)?;
    store.clear().await?;
    let count = events.len();
    for event in events {
        if let Err(err) = store.add_event(event).await {
            warn!(%err, "time entry import stopped");
            return Err(err);
        }
    }
    debug!(count, "imported time entries");
    Ok(count)
}

/// Export every event in `store` as a time-entry document.
pub async fn export_time_entries<S: EventStore + ?Sized>(store: &S) -> StoreResult<String> {
    let events = store.all_events().await?;
    to_time_entries(&events)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "timeEntries": [
            {
                "id": 1,
                "projectId": 7,
                "start": "2024-03-05T09:00:00.000Z",
                "end": "2024-03-05T10:30:00.000Z",
                "duration": 5400000,
                "description": "Design review",
                "order": 0
            },
            {
                "id": "b",
                "start": "2024-03-05T13:00:00",
                "end": "2024-03-05T13:45:00"
            }
        ]
    }"#;

    #[test]
    fn parses_mixed_entries() {
        let events = parse_time_entries(SAMPLE).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "1");
        assert_eq!(events[0].title, "Design review");
        assert_eq!(events[0].project_id.as_deref(), Some("7"));
        assert_eq!(events[0].duration().num_minutes(), 90);
        assert_eq!(events[1].title, "b");
        assert_eq!(events[1].start.to_string(), "2024-03-05 13:00:00");
    }

    #[test]
    fn rejects_bad_timestamp() {
        let json = r#"{"timeEntries":[{"id":"x","start":"yesterday","end":"today"}]}"#;
        assert!(matches!(
            parse_time_entries(json),
            Err(StoreError::InvalidEvent { id, .. }) if id == "x"
        ));
    }

    #[test]
    fn rejects_missing_envelope() {
        assert!(matches!(
            parse_time_entries("[]"),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn export_reimports() {
        let events = parse_time_entries(SAMPLE).unwrap();
        let json = to_time_entries(&events).unwrap();
        assert!(json.contains("\"timeEntries\""));
        assert!(json.contains("\"projectId\": \"7\""));
        assert_eq!(parse_time_entries(&json).unwrap(), events);
    }
}
