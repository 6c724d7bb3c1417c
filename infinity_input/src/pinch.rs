// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch recognition, one zoom step at a time.
//!
//! ## Usage
//!
//! 1) Call [`PinchState::start`] when touches begin; a baseline is taken
//!    when exactly two fingers are down.
//! 2) Call [`PinchState::update`] on each move. Once the finger distance
//!    grows past `in_ratio` times the baseline (or shrinks below
//!    `out_ratio` times it) a [`PinchStep`] is returned and the baseline
//!    resets to the current distance.
//! 3) Call [`PinchState::end`] when the touches end.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use infinity_input::pinch::{PinchState, PinchStep};
//!
//! let mut pinch = PinchState::default();
//! pinch.start(&[Point::new(90.0, 100.0), Point::new(110.0, 100.0)]);
//!
//! // Spread from 20 to 30 units apart.
//! let step = pinch.update(&[Point::new(85.0, 100.0), Point::new(115.0, 100.0)]);
//! assert_eq!(step, Some(PinchStep::ZoomIn { center: Point::new(100.0, 100.0) }));
//! ```

use kurbo::Point;

/// A recognised pinch step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PinchStep {
    /// Fingers spread; zoom in at the midpoint between them.
    ZoomIn {
        /// Midpoint of the two touches.
        center: Point,
    },
    /// Fingers closed; zoom out.
    ZoomOut,
}

/// Tracks the finger distance of a two-finger gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinchState {
    /// Distance ratio that triggers a zoom in.
    pub in_ratio: f64,
    /// Distance ratio that triggers a zoom out.
    pub out_ratio: f64,
    baseline: Option<f64>,
}

impl Default for PinchState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_IN_RATIO, Self::DEFAULT_OUT_RATIO)
    }
}

fn pair(touches: &[Point]) -> Option<(Point, Point)> {
    match touches {
        [a, b] => Some((*a, *b)),
        _ => None,
    }
}

impl PinchState {
    /// Default spread ratio.
    pub const DEFAULT_IN_RATIO: f64 = 1.1;
    /// Default close ratio.
    pub const DEFAULT_OUT_RATIO: f64 = 0.9;

    /// Create with explicit ratios; `out_ratio < 1 < in_ratio` is expected.
    pub const fn new(in_ratio: f64, out_ratio: f64) -> Self {
        Self {
            in_ratio,
            out_ratio,
            baseline: None,
        }
    }

    /// Begin tracking if exactly two touches are down.
    pub fn start(&mut self, touches: &[Point]) {
        if let Some((a, b)) = pair(touches) {
            let distance = a.distance(b);
            self.baseline = (distance > 0.0).then_some(distance);
        }
    }

    /// Feed the current touches; returns a step when a threshold is crossed.
    ///
    /// Anything other than two touches is ignored.
    pub fn update(&mut self, touches: &[Point]) -> Option<PinchStep> {
        let (a, b) = pair(touches)?;
        let distance = a.distance(b);
        let Some(baseline) = self.baseline else {
            // A second finger joined mid-gesture.
            self.start(touches);
            return None;
        };
        if distance > baseline * self.in_ratio {
            self.baseline = Some(distance);
            Some(PinchStep::ZoomIn {
                center: a.midpoint(b),
            })
        } else if distance < baseline * self.out_ratio {
            self.baseline = (distance > 0.0).then_some(distance);
            Some(PinchStep::ZoomOut)
        } else {
            None
        }
    }

    /// Stop tracking.
    pub fn end(&mut self) {
        self.baseline = None;
    }

    /// Returns `true` while a baseline is held.
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }
}
