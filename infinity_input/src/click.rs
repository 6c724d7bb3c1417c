// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment click recognition.
//!
//! A click is a press and release over the same ring segment. A release on
//! a different segment still counts when the pointer moved less than
//! [`ClickState::slop`], so a click landing on a boundary is not lost.

use kurbo::Point;

/// Result of a pointer release.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickResult {
    /// A click on the segment that was pressed.
    Click(u32),
    /// No click: nothing was pressed, or the release was elsewhere.
    None,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Press {
    segment: u32,
    position: Point,
}

/// Tracks the pressed segment between down and up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClickState {
    /// Maximum pointer travel, in surface units, for a release on another
    /// segment to still click the pressed one.
    pub slop: f64,
    pressed: Option<Press>,
}

impl Default for ClickState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickState {
    /// Default travel tolerance.
    pub const DEFAULT_SLOP: f64 = 4.0;

    /// Create with the default tolerance.
    pub const fn new() -> Self {
        Self {
            slop: Self::DEFAULT_SLOP,
            pressed: None,
        }
    }

    /// Pointer pressed at `position` over `segment`.
    pub fn on_down(&mut self, segment: Option<u32>, position: Point) {
        self.pressed = segment.map(|segment| Press { segment, position });
    }

    /// Pointer released at `position` over `segment`.
    pub fn on_up(&mut self, segment: Option<u32>, position: Point) -> ClickResult {
        let Some(press) = self.pressed.take() else {
            return ClickResult::None;
        };
        if segment == Some(press.segment) || press.position.distance(position) <= self.slop {
            ClickResult::Click(press.segment)
        } else {
            ClickResult::None
        }
    }

    /// Drop any pending press, e.g. when the pointer leaves.
    pub fn cancel(&mut self) {
        self.pressed = None;
    }

    /// Returns `true` between a press on a segment and its release.
    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }
}
