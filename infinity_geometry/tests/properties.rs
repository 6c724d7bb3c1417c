// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing must agree with the angle ranges used for drawing.

use infinity_geometry::{RingGeometry, angle_range_for, hit_test, polar_point};
use kurbo::{Point, Size};
use proptest::prelude::*;

fn ring() -> RingGeometry {
    RingGeometry::from_size(Size::new(640.0, 480.0), 0.6, 10.0).unwrap()
}

proptest! {
    #[test]
    fn hit_inverts_angle_range(total in 1_u32..=60, pick in 0.0_f64..1.0, t in 0.02_f64..0.98, along in 0.02_f64..0.98) {
        let ring = ring();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "bounded test input")]
        let index = ((pick * f64::from(total)) as u32).min(total - 1);
        let range = angle_range_for(index, total);
        let angle = range.start + range.sweep() * along;
        let probe = polar_point(ring.center, ring.radius_at(t), angle);
        prop_assert_eq!(hit_test(probe, &ring, total), Some(index));
    }

    #[test]
    fn points_inside_hole_miss(x in -1.0_f64..1.0, y in -1.0_f64..1.0, total in 1_u32..=60) {
        let ring = ring();
        let r = ring.inner_radius * 0.99;
        let probe = Point::new(ring.center.x + x * r * 0.7, ring.center.y + y * r * 0.7);
        prop_assert_eq!(hit_test(probe, &ring, total), None);
    }
}
