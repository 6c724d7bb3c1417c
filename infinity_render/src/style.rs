// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colours, font sizes, and ring layout.

use infinity_geometry::RingGeometry;
use peniko::Color;

/// The six calendar colours.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    /// The doughnut behind the segments.
    pub background: Color,
    /// Segment fill.
    pub segment: Color,
    /// Segment outlines.
    pub border: Color,
    /// Labels.
    pub text: Color,
    /// Event arcs and dots.
    pub event: Color,
    /// Fill of the hovered segment.
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0xf0, 0xf0, 0xf0),
            segment: Color::from_rgb8(0xff, 0xff, 0xff),
            border: Color::from_rgb8(0x00, 0x00, 0x00),
            text: Color::from_rgb8(0x33, 0x33, 0x33),
            event: Color::from_rgb8(0x42, 0x85, 0xf4),
            highlight: Color::from_rgb8(0xe0, 0xe0, 0xe0),
        }
    }
}

/// Font sizes in surface units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FontSizes {
    /// Month names on the year ring and weekday names on the week ring.
    pub label: f64,
    /// Day numbers, hours, and minutes.
    pub small_label: f64,
    /// The year in the centre of the year ring.
    pub title: f64,
    /// Main centre line of the other rings.
    pub heading: f64,
    /// Date range in the centre of the week ring.
    pub subheading: f64,
    /// Week number under the date range.
    pub detail: f64,
    /// Event titles and notices.
    pub event: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            label: 14.0,
            small_label: 12.0,
            title: 24.0,
            heading: 20.0,
            subheading: 16.0,
            detail: 14.0,
            event: 12.0,
        }
    }
}

/// How the ring is fitted into the surface and where events sit on it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingLayout {
    /// Inner radius as a fraction of the outer radius.
    pub inner_radius_ratio: f64,
    /// Gap between the ring and the surface edge.
    pub margin: f64,
    /// Fraction of the ring width where the day-ring event band starts.
    pub event_band: f64,
    /// Radius of event dots on the year and month rings.
    pub dot_radius: f64,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            inner_radius_ratio: RingGeometry::DEFAULT_INNER_RATIO,
            margin: RingGeometry::DEFAULT_MARGIN,
            event_band: 0.8,
            dot_radius: 3.0,
        }
    }
}
