// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event fetches tagged with the view generation.

use chrono::NaiveDateTime;
use infinity_events::{CalendarEvent, StoreResult, day_window, month_window, year_window};
use infinity_render::EventsView;
use infinity_view::{Segment, ViewSnapshot};

/// A fetch the host should run against its event store.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EventRequest {
    /// Segment the events are for.
    pub segment: Segment,
    /// Window start, inclusive.
    pub start: NaiveDateTime,
    /// Window end, exclusive.
    pub end: NaiveDateTime,
    /// View generation the request was issued for.
    pub generation: u64,
}

impl EventRequest {
    /// The request for `snapshot`, if its ring shows events.
    ///
    /// The year, month, and day rings show events; the week and hour rings
    /// do not.
    pub fn for_snapshot(snapshot: &ViewSnapshot) -> Option<Self> {
        let window = match snapshot.segment {
            Segment::Year { year, .. } => year_window(year),
            Segment::Month { year, month, .. } => month_window(year, month),
            Segment::Day { date, .. } => day_window(date),
            Segment::Week { .. } | Segment::Hour { .. } => return None,
        };
        let (start, end) = window.ok()?;
        Some(Self {
            segment: snapshot.segment,
            start,
            end,
            generation: snapshot.generation,
        })
    }
}

/// What happened to a delivered fetch result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Stored; this many events will be drawn.
    Applied(usize),
    /// The fetch failed; the view shows an "events unavailable" notice.
    Failed,
    /// The view moved on since the request; the result was dropped.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
enum Loaded {
    #[default]
    Nothing,
    Events {
        generation: u64,
        events: Vec<CalendarEvent>,
    },
    Failed {
        generation: u64,
    },
}

/// Event data for the current view and the fetch in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct EventSlot {
    loaded: Loaded,
    outstanding: Option<u64>,
}

impl EventSlot {
    /// Issue a request for `snapshot` unless one is already out or done.
    pub(crate) fn request(&mut self, snapshot: &ViewSnapshot) -> Option<EventRequest> {
        if self.outstanding == Some(snapshot.generation) || self.has(snapshot.generation) {
            return None;
        }
        let request = EventRequest::for_snapshot(snapshot)?;
        self.outstanding = Some(snapshot.generation);
        Some(request)
    }

    /// Store `result` if it is for `current`.
    pub(crate) fn deliver(
        &mut self,
        current: u64,
        request: &EventRequest,
        result: StoreResult<Vec<CalendarEvent>>,
    ) -> Delivery {
        if self.outstanding == Some(request.generation) {
            self.outstanding = None;
        }
        if request.generation != current {
            return Delivery::Stale;
        }
        match result {
            Ok(events) => {
                let count = events.len();
                self.loaded = Loaded::Events {
                    generation: current,
                    events,
                };
                Delivery::Applied(count)
            }
            Err(err) => {
                tracing::warn!(%err, generation = current, "event fetch failed");
                self.loaded = Loaded::Failed {
                    generation: current,
                };
                Delivery::Failed
            }
        }
    }

    /// What to draw for `generation`.
    pub(crate) fn view(&self, generation: u64) -> EventsView<'_> {
        match &self.loaded {
            Loaded::Events {
                generation: g,
                events,
            } if *g == generation => EventsView::Ready(events),
            Loaded::Failed { generation: g } if *g == generation => EventsView::Failed,
            _ => EventsView::Loading,
        }
    }

    fn has(&self, generation: u64) -> bool {
        match self.loaded {
            Loaded::Events { generation: g, .. } | Loaded::Failed { generation: g } => {
                g == generation
            }
            Loaded::Nothing => false,
        }
    }
}
