// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store behaviour through the `EventStore` trait object.

use chrono::{Days, NaiveDate, NaiveDateTime};
use infinity_events::{
    CalendarEvent, EventStore, InMemoryEventStore, export_time_entries, import_time_entries,
};
use pollster::block_on;
use proptest::prelude::*;

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn import_replaces_contents() {
    let store: Box<dyn EventStore> = Box::new(InMemoryEventStore::new());
    let old = CalendarEvent::new("old", "Old", at(1, 9, 0), at(1, 10, 0)).unwrap();
    block_on(store.add_event(old)).unwrap();

    let json = r#"{"timeEntries":[
        {"id":"a","start":"2024-06-03T08:00:00","end":"2024-06-03T09:00:00","description":"Write"},
        {"id":"b","start":"2024-06-03T11:00:00","end":"2024-06-03T11:30:00"}
    ]}"#;
    assert_eq!(block_on(import_time_entries(store.as_ref(), json)).unwrap(), 2);

    let all = block_on(store.all_events()).unwrap();
    let ids: Vec<_> = all.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn malformed_import_keeps_store() {
    let store = InMemoryEventStore::new();
    let kept = CalendarEvent::new("kept", "Kept", at(1, 9, 0), at(1, 10, 0)).unwrap();
    block_on(store.add_event(kept)).unwrap();
    assert!(block_on(import_time_entries(&store, "{\"timeEntries\": 3}")).is_err());
    assert_eq!(store.len(), 1);
}

#[test]
fn export_then_import_preserves_events() {
    let store = InMemoryEventStore::new();
    let event = CalendarEvent::new("x", "Focus", at(2, 14, 0), at(2, 16, 0))
        .unwrap()
        .with_project("deep-work")
        .with_description("No meetings");
    block_on(store.add_event(event.clone())).unwrap();

    let json = block_on(export_time_entries(&store)).unwrap();
    let copy = InMemoryEventStore::new();
    block_on(import_time_entries(&copy, &json)).unwrap();
    assert_eq!(block_on(copy.all_events()).unwrap(), [event]);
}

proptest! {
    #[test]
    fn date_query_matches_overlap(
        spans in prop::collection::vec((0_u64..(5 * 24 * 60), 0_u64..(36 * 60)), 0..20),
        day in 1_u32..=5,
    ) {
        let base = at(1, 0, 0);
        let events: Vec<_> = spans
            .iter()
            .enumerate()
            .map(|(i, (offset, length))| {
                let start = base + chrono::TimeDelta::minutes(i64::try_from(*offset).unwrap());
                let end = start + chrono::TimeDelta::minutes(i64::try_from(*length).unwrap());
                CalendarEvent::new(i.to_string(), "e", start, end).unwrap()
            })
            .collect();
        let store = InMemoryEventStore::with_events(events.clone()).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
        let window_start = date.and_hms_opt(0, 0, 0).unwrap();
        let window_end = date.checked_add_days(Days::new(1)).unwrap().and_hms_opt(0, 0, 0).unwrap();

        let mut expected: Vec<_> = events
            .into_iter()
            .filter(|e| e.overlaps(window_start, window_end))
            .map(|e| e.id)
            .collect();
        expected.sort();
        let mut got: Vec<_> = block_on(store.events_for_date(date))
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        got.sort();
        prop_assert_eq!(got, expected);
    }
}
