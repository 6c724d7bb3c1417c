// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring geometry derived from a drawing-surface size.

use core::fmt;

use kurbo::{Point, Size};

use crate::{SegmentAngleRange, polar_point};

/// Error returned when a surface size cannot hold a ring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The surface is too small (or not finite) for the requested margin.
    DegenerateRing {
        /// Surface width.
        width: f64,
        /// Surface height.
        height: f64,
    },
    /// The inner radius ratio is not in `[0, 1)`.
    InvalidRatio(f64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateRing { width, height } => {
                write!(f, "surface {width}x{height} is too small to hold a ring")
            }
            Self::InvalidRatio(ratio) => {
                write!(f, "inner radius ratio {ratio} is outside [0, 1)")
            }
        }
    }
}

impl core::error::Error for GeometryError {}

/// Centre and radii of the calendar ring.
///
/// The ring is derived, never stored: callers rebuild it from the current
/// surface size before drawing or hit testing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingGeometry {
    /// Ring centre in surface coordinates.
    pub center: Point,
    /// Outer radius.
    pub outer_radius: f64,
    /// Inner radius (the hole of the doughnut).
    pub inner_radius: f64,
}

impl RingGeometry {
    /// Default ratio of inner to outer radius.
    pub const DEFAULT_INNER_RATIO: f64 = 0.6;

    /// Default gap between the outer edge and the surface border.
    pub const DEFAULT_MARGIN: f64 = 10.0;

    /// Create a ring from explicit values.
    #[inline]
    pub const fn new(center: Point, outer_radius: f64, inner_radius: f64) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius,
        }
    }

    /// Fit a ring into a surface of `size`.
    ///
    /// The centre is the middle of the surface, the outer radius is
    /// `min(w, h) / 2 - margin`, and the inner radius is
    /// `outer_radius * inner_ratio`.
    pub fn from_size(size: Size, inner_ratio: f64, margin: f64) -> Result<Self, GeometryError> {
        if !(0.0..1.0).contains(&inner_ratio) {
            return Err(GeometryError::InvalidRatio(inner_ratio));
        }
        let outer_radius = size.width.min(size.height) * 0.5 - margin;
        if !outer_radius.is_finite() || outer_radius <= 0.0 {
            return Err(GeometryError::DegenerateRing {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self {
            center: Point::new(size.width * 0.5, size.height * 0.5),
            outer_radius,
            inner_radius: outer_radius * inner_ratio,
        })
    }

    /// Radius halfway through the ring; where segment labels sit.
    #[inline]
    pub fn mid_radius(&self) -> f64 {
        (self.outer_radius + self.inner_radius) * 0.5
    }

    /// Radial thickness of the ring.
    #[inline]
    pub fn width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Radius at fraction `t` of the way from the inner to the outer edge.
    #[inline]
    pub fn radius_at(&self, t: f64) -> f64 {
        self.inner_radius + self.width() * t
    }

    /// Whether `distance` from the centre lies on the ring (edges included).
    #[inline]
    pub fn contains_radius(&self, distance: f64) -> bool {
        distance >= self.inner_radius && distance <= self.outer_radius
    }
}

/// Where the label of a segment sits: mid angle, mid radius.
#[inline]
pub fn label_position(range: &SegmentAngleRange, ring: &RingGeometry) -> Point {
    polar_point(ring.center, ring.mid_radius(), range.mid())
}
