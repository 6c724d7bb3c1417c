// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event store indexed by start time.

use std::collections::{BTreeSet, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::debug;

use crate::{CalendarEvent, EventStore, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Tables {
    by_id: HashMap<String, CalendarEvent>,
    by_start: BTreeSet<(NaiveDateTime, String)>,
}

impl Tables {
    fn insert(&mut self, event: CalendarEvent) {
        self.by_start.insert((event.start, event.id.clone()));
        self.by_id.insert(event.id.clone(), event);
    }

    fn remove(&mut self, id: &str) -> Option<CalendarEvent> {
        let event = self.by_id.remove(id)?;
        self.by_start.remove(&(event.start, event.id.clone()));
        Some(event)
    }
}

/// An [`EventStore`] held in memory.
///
/// Events are kept in a map by id plus an ordered index on
/// `(start, id)`, so window queries only scan events that start before the
/// window ends.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    tables: RwLock<Tables>,
}

impl InMemoryEventStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `events`.
    pub fn with_events(events: impl IntoIterator<Item = CalendarEvent>) -> StoreResult<Self> {
        let store = Self::new();
        {
            let mut tables = store.write()?;
            for event in events {
                event.validate()?;
                if tables.by_id.contains_key(&event.id) {
                    return Err(StoreError::DuplicateId { id: event.id });
                }
                tables.insert(event);
            }
        }
        Ok(store)
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.read().map(|t| t.by_id.len()).unwrap_or(0)
    }

    /// Whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("event table lock poisoned".into()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("event table lock poisoned".into()))
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn events_for_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> StoreResult<Vec<CalendarEvent>> {
        let tables = self.read()?;
        let events: Vec<_> = tables
            .by_start
            .iter()
            .take_while(|(event_start, _)| *event_start < end)
            .filter_map(|(_, id)| tables.by_id.get(id))
            .filter(|event| event.overlaps(start, end))
            .cloned()
            .collect();
        debug!(%start, %end, count = events.len(), "range query");
        Ok(events)
    }

    async fn all_events(&self) -> StoreResult<Vec<CalendarEvent>> {
        let tables = self.read()?;
        Ok(tables
            .by_start
            .iter()
            .filter_map(|(_, id)| tables.by_id.get(id))
            .cloned()
            .collect())
    }

    async fn add_event(&self, event: CalendarEvent) -> StoreResult<String> {
        event.validate()?;
        let mut tables = self.write()?;
        if tables.by_id.contains_key(&event.id) {
            return Err(StoreError::DuplicateId { id: event.id });
        }
        debug!(id = %event.id, "add event");
        let id = event.id.clone();
        tables.insert(event);
        Ok(id)
    }

    async fn update_event(&self, id: &str, event: CalendarEvent) -> StoreResult<()> {
        event.validate()?;
        let mut tables = self.write()?;
        if !tables.by_id.contains_key(id) {
            return Err(StoreError::NotFound { id: id.to_owned() });
        }
        if event.id != id && tables.by_id.contains_key(&event.id) {
            return Err(StoreError::DuplicateId { id: event.id });
        }
        tables.remove(id);
        debug!(id, new_id = %event.id, "update event");
        tables.insert(event);
        Ok(())
    }

    async fn remove_event(&self, id: &str) -> StoreResult<CalendarEvent> {
        let mut tables = self.write()?;
        let removed = tables
            .remove(id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_owned() })?;
        debug!(id, "remove event");
        Ok(removed)
    }

    async fn clear(&self) -> StoreResult<()> {
        let mut tables = self.write()?;
        *tables = Tables::default();
        debug!("clear events");
        Ok(())
    }
}
