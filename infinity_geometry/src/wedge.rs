// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Doughnut-wedge outlines.

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::{PI, TAU};
use core::fmt::Write as _;

use kurbo::{Arc, BezPath, Point, Vec2};

use crate::{RingGeometry, SegmentAngleRange, polar_point};

/// Sweeps within this distance of a full turn are drawn as a closed annulus.
const FULL_TURN_EPSILON: f64 = 1e-9;

/// One step of a wedge outline.
///
/// Arcs carry both their centre parameterisation (for rasterisers) and the
/// endpoint flags an SVG `A` command needs, so backends never recompute
/// either.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight edge to a point.
    LineTo(Point),
    /// Circular arc ending at `to`.
    ArcTo {
        /// Arc centre.
        center: Point,
        /// Arc radius.
        radius: f64,
        /// Angle of the arc's start point.
        start_angle: f64,
        /// Signed angular extent; positive runs clockwise on screen.
        sweep_angle: f64,
        /// SVG large-arc flag: the arc spans more than half a turn.
        large_arc: bool,
        /// SVG sweep flag: the arc runs in the positive-angle direction.
        sweep: bool,
        /// End point.
        to: Point,
    },
    /// Close the current subpath.
    Close,
}

/// Backend-neutral outline of a wedge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WedgePath {
    /// Commands in drawing order.
    pub commands: Vec<PathCommand>,
}

impl WedgePath {
    /// Flatten into a kurbo path, approximating arcs with cubic Béziers.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => path.move_to(p),
                PathCommand::LineTo(p) => path.line_to(p),
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                    ..
                } => {
                    let arc = Arc::new(
                        center,
                        Vec2::new(radius, radius),
                        start_angle,
                        sweep_angle,
                        0.0,
                    );
                    path.extend(arc.append_iter(tolerance));
                }
                PathCommand::Close => path.close_path(),
            }
        }
        path
    }

    /// SVG path data (`d` attribute) for this outline.
    ///
    /// Coordinates are written with up to three decimals.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for command in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writing into a `String` cannot fail.
            let _ = match *command {
                PathCommand::MoveTo(p) => write!(d, "M {} {}", SvgNumber(p.x), SvgNumber(p.y)),
                PathCommand::LineTo(p) => write!(d, "L {} {}", SvgNumber(p.x), SvgNumber(p.y)),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                    ..
                } => write!(
                    d,
                    "A {r} {r} 0 {} {} {} {}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    SvgNumber(to.x),
                    SvgNumber(to.y),
                    r = SvgNumber(radius),
                ),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }

    /// Whether the outline has no commands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// One segment of a ring, as a fillable shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Wedge {
    /// Ring centre.
    pub center: Point,
    /// Outer radius.
    pub outer_radius: f64,
    /// Inner radius; zero yields a pie slice.
    pub inner_radius: f64,
    /// Angular span.
    pub range: SegmentAngleRange,
}

impl Wedge {
    /// The wedge of `ring` covering `range`.
    #[inline]
    pub fn on_ring(ring: &RingGeometry, range: SegmentAngleRange) -> Self {
        Self {
            center: ring.center,
            outer_radius: ring.outer_radius,
            inner_radius: ring.inner_radius,
            range,
        }
    }

    /// Outline of this wedge.
    pub fn path(&self) -> WedgePath {
        arc_path(
            self.center,
            self.outer_radius,
            self.inner_radius,
            self.range.start,
            self.range.end,
        )
    }

    /// Point at the middle of the wedge, on the mid radius and mid angle.
    pub fn centroid(&self) -> Point {
        polar_point(
            self.center,
            (self.inner_radius + self.outer_radius) * 0.5,
            self.range.mid(),
        )
    }
}

/// Compact decimal formatting for SVG attributes: three decimals, trailing
/// zeros trimmed, and `-0` written as `0`.
///
/// ```rust
/// use infinity_geometry::SvgNumber;
///
/// assert_eq!(SvgNumber(2.0 / 3.0).to_string(), "0.667");
/// assert_eq!(SvgNumber(-0.0001).to_string(), "0");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SvgNumber(pub f64);

impl core::fmt::Display for SvgNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buf = String::new();
        write!(buf, "{:.3}", self.0)?;
        let trimmed = if buf.contains('.') {
            buf.trim_end_matches('0').trim_end_matches('.')
        } else {
            buf.as_str()
        };
        match trimmed {
            "-0" => f.write_str("0"),
            other => f.write_str(other),
        }
    }
}

fn push_arc(commands: &mut Vec<PathCommand>, center: Point, radius: f64, start: f64, end: f64) {
    let sweep_angle = end - start;
    commands.push(PathCommand::ArcTo {
        center,
        radius,
        start_angle: start,
        sweep_angle,
        large_arc: sweep_angle.abs() > PI,
        sweep: sweep_angle > 0.0,
        to: polar_point(center, radius, end),
    });
}

/// Outline of the ring sector between `outer_radius` and `inner_radius`
/// spanning `start_angle..end_angle`.
///
/// The outer edge runs clockwise from start to end, the inner edge runs
/// back. A sweep of a full turn is split into two half-turn arcs per edge,
/// since a single SVG arc cannot start and end at the same point. With an
/// inner radius of zero the inner edge collapses to the centre.
pub fn arc_path(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> WedgePath {
    let mut commands = Vec::with_capacity(8);
    let sweep = end_angle - start_angle;
    let full_turn = sweep.abs() >= TAU - FULL_TURN_EPSILON;
    let has_hole = inner_radius > 0.0;

    commands.push(PathCommand::MoveTo(polar_point(
        center,
        outer_radius,
        start_angle,
    )));
    if full_turn {
        let half = start_angle + sweep * 0.5;
        push_arc(&mut commands, center, outer_radius, start_angle, half);
        push_arc(&mut commands, center, outer_radius, half, end_angle);
        commands.push(PathCommand::Close);
        if has_hole {
            commands.push(PathCommand::MoveTo(polar_point(
                center,
                inner_radius,
                end_angle,
            )));
            push_arc(&mut commands, center, inner_radius, end_angle, half);
            push_arc(&mut commands, center, inner_radius, half, start_angle);
            commands.push(PathCommand::Close);
        }
        return WedgePath { commands };
    }

    push_arc(&mut commands, center, outer_radius, start_angle, end_angle);
    if has_hole {
        commands.push(PathCommand::LineTo(polar_point(
            center,
            inner_radius,
            end_angle,
        )));
        push_arc(&mut commands, center, inner_radius, end_angle, start_angle);
    } else {
        commands.push(PathCommand::LineTo(center));
    }
    commands.push(PathCommand::Close);
    WedgePath { commands }
}
