// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinity_geometry --heading-base-level=0

//! Infinity Geometry: ring and segment geometry for the radial calendar.
//!
//! The calendar draws every view as a doughnut ("ring") split into `N` equal
//! wedges. This crate owns the math that both drawing and pointer input
//! depend on:
//!
//! - [`RingGeometry`]: centre and radii derived from a surface size.
//! - [`angle_range_for`]: the angular span of segment `i` of `N`.
//! - [`arc_path`] / [`Wedge`]: the doughnut-wedge outline as a small path
//!   description that vector and raster backends both consume.
//! - [`hit_test`]: the exact inverse of [`angle_range_for`], mapping a point
//!   back to a segment index.
//! - [`time_to_angle`]: hours of the day mapped onto a 24-segment ring.
//!
//! ## Angle convention
//!
//! Angles are in radians in screen space (y grows downwards), so increasing
//! angles run clockwise. Segment 0 starts at 12 o'clock (`-π/2`), offset by
//! [`SEGMENT_ROTATION`]. The same constant is applied by [`angle_range_for`],
//! [`time_to_angle`], and [`hit_test`], so drawing and hit testing cannot
//! disagree.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use infinity_geometry::{RingGeometry, angle_range_for, hit_test, polar_point};
//!
//! let ring = RingGeometry::from_size(Size::new(400.0, 400.0), 0.6, 10.0).unwrap();
//!
//! // Segment 2 of 12 (March on the year ring).
//! let range = angle_range_for(2, 12);
//! let probe = polar_point(ring.center, ring.mid_radius(), range.mid());
//! assert_eq!(hit_test(probe, &ring, 12), Some(2));
//!
//! // The centre of the ring is not part of any segment.
//! assert_eq!(hit_test(Point::new(200.0, 200.0), &ring, 12), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod angles;
mod hit;
mod ring;
mod wedge;

pub use angles::{
    SEGMENT_ROTATION, SegmentAngleRange, angle_range_for, normalize_angle, polar_point,
    time_to_angle,
};
pub use hit::hit_test;
pub use ring::{GeometryError, RingGeometry, label_position};
pub use wedge::{PathCommand, SvgNumber, Wedge, WedgePath, arc_path};
