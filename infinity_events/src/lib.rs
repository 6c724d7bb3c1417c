// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinity_events --heading-base-level=0

//! Infinity Events: calendar events and the store they are read from.
//!
//! The calendar never owns its events. It asks an [`EventStore`] for the
//! events overlapping the day (or month, or year) it is about to draw, and
//! the store answers asynchronously. This crate provides:
//!
//! - [`CalendarEvent`]: the event record, with half-open overlap tests.
//! - [`EventStore`]: the async port, keyed by event id and queried by window.
//! - [`InMemoryEventStore`]: a store indexed by start time.
//! - [`parse_time_entries`] / [`to_time_entries`]: the `timeEntries` JSON
//!   document format, plus store-level [`import_time_entries`] and
//!   [`export_time_entries`].
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use infinity_events::{CalendarEvent, EventStore, InMemoryEventStore};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let store = InMemoryEventStore::new();
//! let standup = CalendarEvent::new(
//!     "standup",
//!     "Standup",
//!     day.and_hms_opt(9, 0, 0).unwrap(),
//!     day.and_hms_opt(9, 15, 0).unwrap(),
//! )
//! .unwrap();
//!
//! pollster::block_on(async {
//!     store.add_event(standup).await.unwrap();
//!     let events = store.events_for_date(day).await.unwrap();
//!     assert_eq!(events.len(), 1);
//! });
//! ```

mod error;
mod event;
mod json;
mod memory;
mod store;

pub use error::{StoreError, StoreResult};
pub use event::CalendarEvent;
pub use json::{export_time_entries, import_time_entries, parse_time_entries, to_time_entries};
pub use memory::InMemoryEventStore;
pub use store::{EventStore, day_window, month_window, year_window};
