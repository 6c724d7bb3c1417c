// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point to segment lookup.

use core::f64::consts::{FRAC_PI_2, TAU};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::{RingGeometry, SEGMENT_ROTATION, normalize_angle};

/// Segment index of `count` under `point`, or `None` when the point is off the ring.
///
/// Points in the hole or outside the outer edge miss. Points exactly on a
/// boundary between two segments resolve to the later one, matching the
/// half-open ranges produced by [`angle_range_for`](crate::angle_range_for).
pub fn hit_test(point: Point, ring: &RingGeometry, count: u32) -> Option<u32> {
    if count == 0 {
        return None;
    }
    let offset = point - ring.center;
    if !ring.contains_radius(offset.hypot()) {
        return None;
    }
    let turn = normalize_angle(offset.atan2() + FRAC_PI_2 - SEGMENT_ROTATION);
    let raw = (turn / TAU * f64::from(count)).floor();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "`raw` is in [0, count] after normalisation"
    )]
    let index = raw as u32;
    Some(index.min(count - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{angle_range_for, polar_point};

    fn ring() -> RingGeometry {
        RingGeometry::new(Point::new(200.0, 200.0), 190.0, 114.0)
    }

    #[test]
    fn twelve_o_clock_is_segment_zero() {
        let ring = ring();
        let top = Point::new(200.0, 200.0 - 150.0);
        assert_eq!(hit_test(top, &ring, 12), Some(0));
        assert_eq!(hit_test(top, &ring, 24), Some(0));
    }

    #[test]
    fn three_o_clock_is_a_quarter_turn() {
        let ring = ring();
        let right = Point::new(200.0 + 150.0, 200.0);
        assert_eq!(hit_test(right, &ring, 12), Some(3));
        assert_eq!(hit_test(right, &ring, 24), Some(6));
    }

    #[test]
    fn misses_hole_and_outside() {
        let ring = ring();
        assert_eq!(hit_test(ring.center, &ring, 12), None);
        assert_eq!(hit_test(Point::new(200.0, 5.0), &ring, 12), None);
        assert_eq!(hit_test(Point::new(200.0, 100.0), &ring, 12), None);
    }

    #[test]
    fn empty_ring_never_hits() {
        assert_eq!(hit_test(Point::new(200.0, 50.0), &ring(), 0), None);
    }

    #[test]
    fn midpoints_round_trip() {
        let ring = ring();
        for total in [7_u32, 12, 24, 28, 31] {
            for i in 0..total {
                let mid = angle_range_for(i, total).mid();
                let probe = polar_point(ring.center, ring.mid_radius(), mid);
                assert_eq!(hit_test(probe, &ring, total), Some(i), "{i} of {total}");
            }
        }
    }
}
