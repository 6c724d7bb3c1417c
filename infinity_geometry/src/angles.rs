// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment angle ranges and the clock-face angle convention.

use core::f64::consts::{FRAC_PI_2, TAU};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Extra rotation applied to every ring, in radians.
///
/// Zero places segment 0 exactly at 12 o'clock for every view. Drawing
/// ([`angle_range_for`], [`time_to_angle`]) and hit testing
/// ([`hit_test`](crate::hit_test)) all read this one constant.
pub const SEGMENT_ROTATION: f64 = 0.0;

/// Angular span of one segment, `start..end` in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentAngleRange {
    /// Start angle (inclusive).
    pub start: f64,
    /// End angle (exclusive).
    pub end: f64,
}

impl SegmentAngleRange {
    /// Create a range from explicit angles.
    #[inline]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Angle halfway between start and end; used for label placement.
    #[inline]
    pub fn mid(&self) -> f64 {
        (self.start + self.end) * 0.5
    }

    /// Signed angular extent.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// Whether the span is wider than half a turn (the SVG "large-arc" case).
    #[inline]
    pub fn is_large(&self) -> bool {
        self.sweep() > core::f64::consts::PI
    }
}

/// Angular span of segment `index` out of `total`.
///
/// `2π·i/N − π/2 .. 2π·(i+1)/N − π/2`, plus [`SEGMENT_ROTATION`]. Consecutive
/// segments share their boundary exactly, and the ranges of `0..N` partition
/// one full turn starting at 12 o'clock.
///
/// `total` must be non-zero.
pub fn angle_range_for(index: u32, total: u32) -> SegmentAngleRange {
    debug_assert!(total > 0, "a ring needs at least one segment");
    let n = f64::from(total);
    let start = TAU * f64::from(index) / n - FRAC_PI_2 + SEGMENT_ROTATION;
    let end = TAU * f64::from(index + 1) / n - FRAC_PI_2 + SEGMENT_ROTATION;
    SegmentAngleRange { start, end }
}

/// Map a time of day, in fractional hours, onto the 24-segment day ring.
///
/// `(hours / 24)·2π − π/2`, the same convention as [`angle_range_for`] with
/// `total = 24`.
pub fn time_to_angle(hours: f64) -> f64 {
    TAU * hours / 24.0 - FRAC_PI_2 + SEGMENT_ROTATION
}

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle - TAU * (angle / TAU).floor();
    // `floor` can leave exactly TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// The point at `radius` from `center` along `angle`.
#[inline]
pub fn polar_point(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * radius
}
