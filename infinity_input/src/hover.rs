// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hovered-segment tracking.
//!
//! [`HoverState`] remembers the last pointer position (keyboard zoom acts
//! there) and which ring segment it is over, and reports leave/enter
//! transitions when that segment changes.

use kurbo::Point;
use smallvec::SmallVec;

/// A hover transition for a segment index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// The pointer entered a segment.
    Enter(u32),
    /// The pointer left a segment.
    Leave(u32),
}

/// Transitions produced by a single update; at most a leave and an enter.
pub type HoverEvents = SmallVec<[HoverEvent; 2]>;

/// Last pointer position and the segment under it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HoverState {
    position: Option<Point>,
    segment: Option<u32>,
}

impl HoverState {
    /// No pointer, no segment.
    pub const fn new() -> Self {
        Self {
            position: None,
            segment: None,
        }
    }

    /// Record a pointer move to `position` over `segment`.
    pub fn update(&mut self, position: Point, segment: Option<u32>) -> HoverEvents {
        self.position = Some(position);
        self.set_segment(segment)
    }

    /// The pointer left the surface.
    pub fn leave(&mut self) -> HoverEvents {
        self.position = None;
        self.set_segment(None)
    }

    /// Forget the segment but keep the position, e.g. after the ring changed.
    pub fn reset_segment(&mut self) {
        self.segment = None;
    }

    /// Last known pointer position.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Segment currently under the pointer.
    pub fn segment(&self) -> Option<u32> {
        self.segment
    }

    fn set_segment(&mut self, segment: Option<u32>) -> HoverEvents {
        let mut events = HoverEvents::new();
        if self.segment == segment {
            return events;
        }
        if let Some(old) = self.segment {
            events.push(HoverEvent::Leave(old));
        }
        if let Some(new) = segment {
            events.push(HoverEvent::Enter(new));
        }
        self.segment = segment;
        events
    }
}
