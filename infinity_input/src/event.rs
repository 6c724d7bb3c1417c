// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-neutral input events.
//!
//! Hosts translate their native pointer, wheel, touch, and keyboard events
//! into [`InputEvent`] values in surface coordinates and feed them to the
//! widget one at a time.

use kurbo::Point;
use smallvec::SmallVec;

/// Active touch points, in surface coordinates.
pub type TouchPoints = SmallVec<[Point; 2]>;

/// Keys the calendar reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character, as typed.
    Character(char),
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Escape.
    Escape,
}

/// One input event delivered to the calendar.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to a position.
    PointerMove(Point),
    /// Primary button pressed.
    PointerDown(Point),
    /// Primary button released.
    PointerUp(Point),
    /// Pointer left the surface.
    PointerLeave,
    /// Wheel scrolled at `position`; negative `delta_y` scrolls up.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Vertical scroll amount.
        delta_y: f64,
    },
    /// Touches began; carries every active touch.
    TouchStart(TouchPoints),
    /// Touches moved; carries every active touch.
    TouchMove(TouchPoints),
    /// All touches ended.
    TouchEnd,
    /// Key pressed.
    Key {
        /// Which key.
        key: Key,
        /// Host timestamp in milliseconds.
        timestamp_ms: u64,
    },
}

impl InputEvent {
    /// Position carried by pointer and wheel events.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerMove(p) | Self::PointerDown(p) | Self::PointerUp(p) => Some(*p),
            Self::Wheel { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Touch event with the given points.
    pub fn touch_start(points: impl IntoIterator<Item = Point>) -> Self {
        Self::TouchStart(points.into_iter().collect())
    }

    /// Touch move with the given points.
    pub fn touch_move(points: impl IntoIterator<Item = Point>) -> Self {
        Self::TouchMove(points.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(InputEvent::PointerDown(p).position(), Some(p));
        assert_eq!(
            InputEvent::Wheel {
                position: p,
                delta_y: -1.0
            }
            .position(),
            Some(p)
        );
        assert_eq!(InputEvent::PointerLeave.position(), None);
    }

    #[test]
    fn two_touches_stay_inline() {
        let event = InputEvent::touch_start([Point::ZERO, Point::new(1.0, 1.0)]);
        let InputEvent::TouchStart(points) = event else {
            panic!("expected touch start");
        };
        assert!(!points.spilled());
        assert_eq!(points.len(), 2);
    }
}
