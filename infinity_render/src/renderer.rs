// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing a view onto a [`DrawSurface`].

use std::collections::BTreeSet;
use std::f64::consts::{FRAC_PI_2, TAU};

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use infinity_events::{CalendarEvent, day_window, month_window, year_window};
use infinity_geometry::{
    RingGeometry, SegmentAngleRange, Wedge, angle_range_for, label_position, polar_point,
    time_to_angle,
};
use infinity_time::days_in_month;
use infinity_view::{Segment, ViewLevel, ViewSnapshot};
use kurbo::{Point, Size, Vec2};
use tracing::{trace, warn};

use crate::labels::{LabelLine, center_label, segment_label};
use crate::{DrawSurface, FontSizes, Palette, RenderError, RingLayout, TextRun};

/// Text of the notice drawn when events could not be loaded.
pub const EVENTS_UNAVAILABLE: &str = "events unavailable";

/// What the renderer knows about events for the current segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EventsView<'a> {
    /// A fetch is in flight; no events are drawn.
    Loading,
    /// Events overlapping the current segment.
    Ready(&'a [CalendarEvent]),
    /// The last fetch failed.
    Failed,
}

/// Draws calendar views.
///
/// The renderer holds only styling. View state comes in with every call and
/// is never modified.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Renderer {
    /// Colours.
    pub palette: Palette,
    /// Font sizes.
    pub fonts: FontSizes,
    /// Ring placement.
    pub layout: RingLayout,
}

impl Renderer {
    /// Create a renderer with explicit styling.
    pub fn new(palette: Palette, fonts: FontSizes, layout: RingLayout) -> Self {
        Self {
            palette,
            fonts,
            layout,
        }
    }

    /// Ring fitted into a surface of `size`.
    pub fn ring_for(&self, size: Size) -> Result<RingGeometry, RenderError> {
        Ok(RingGeometry::from_size(
            size,
            self.layout.inner_radius_ratio,
            self.layout.margin,
        )?)
    }

    /// Draw `snapshot` filling `surface`; returns the ring used, for hit testing.
    pub fn render_snapshot<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        snapshot: &ViewSnapshot,
        events: EventsView<'_>,
    ) -> Result<RingGeometry, RenderError> {
        let ring = self.ring_for(surface.bounding_size())?;
        self.render(
            surface,
            snapshot.view(),
            &snapshot.segment,
            &ring,
            snapshot.hovered,
            events,
        )?;
        Ok(ring)
    }

    /// Draw `segment` as the `view` ring.
    ///
    /// Fails without touching the surface when `segment` is not at `view`.
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        view: ViewLevel,
        segment: &Segment,
        ring: &RingGeometry,
        hovered: Option<u32>,
        events: EventsView<'_>,
    ) -> Result<(), RenderError> {
        if segment.level() != view {
            return Err(RenderError::InvalidState {
                view,
                segment: segment.level(),
            });
        }
        let count = segment.segment_count();
        trace!(%segment, count, ?hovered, "render");

        surface.clear();
        let background = Wedge::on_ring(ring, full_turn());
        surface.fill_wedge(&background, self.palette.background, None);

        for index in 0..count {
            let range = angle_range_for(index, count);
            let fill = if hovered == Some(index) {
                self.palette.highlight
            } else {
                self.palette.segment
            };
            surface.fill_wedge(
                &Wedge::on_ring(ring, range),
                fill,
                Some(self.palette.border),
            );
            let anchor = label_position(&range, ring);
            self.draw_lines(surface, anchor, &segment_label(segment, index, &self.fonts));
        }

        match events {
            EventsView::Loading => {}
            EventsView::Failed => {
                warn!(%segment, "drawing without events: fetch failed");
                let notice = TextRun::centered(
                    EVENTS_UNAVAILABLE,
                    ring.center + Vec2::new(0.0, ring.inner_radius * 0.6),
                    self.fonts.event,
                    self.palette.text,
                );
                surface.draw_text(&notice);
            }
            EventsView::Ready(list) => self.draw_events(surface, segment, ring, list),
        }

        self.draw_lines(surface, ring.center, &center_label(segment, &self.fonts));
        Ok(())
    }

    fn draw_lines<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        anchor: Point,
        lines: &[LabelLine],
    ) {
        for line in lines {
            let run = TextRun::centered(
                line.text.clone(),
                anchor + Vec2::new(0.0, line.dy),
                line.font_size,
                self.palette.text,
            );
            surface.draw_text(&run);
        }
    }

    fn draw_events<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        segment: &Segment,
        ring: &RingGeometry,
        events: &[CalendarEvent],
    ) {
        match *segment {
            Segment::Day { date, .. } => self.draw_day_events(surface, ring, date, events),
            Segment::Month { year, month, .. } => {
                let Ok((start, end)) = month_window(year, month) else {
                    return;
                };
                let count = segment.segment_count();
                for day in touched_days(events, start, end) {
                    let angle = angle_range_for(day.day0(), count).mid();
                    self.draw_dot(surface, polar_point(ring.center, ring.mid_radius(), angle));
                }
            }
            Segment::Year { year, .. } => {
                let Ok((start, end)) = year_window(year) else {
                    return;
                };
                for day in touched_days(events, start, end) {
                    let month = angle_range_for(day.month0(), 12);
                    let Ok(days) = days_in_month(day.year(), day.month0()) else {
                        continue;
                    };
                    // Centre of the day's share of the month span.
                    let share = (f64::from(day.day0()) + 0.5) / f64::from(days);
                    let angle = month.start + share * month.sweep();
                    self.draw_dot(surface, polar_point(ring.center, ring.mid_radius(), angle));
                }
            }
            Segment::Week { .. } | Segment::Hour { .. } => {}
        }
    }

    fn draw_day_events<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        ring: &RingGeometry,
        date: NaiveDate,
        events: &[CalendarEvent],
    ) {
        let Ok((day_start, day_end)) = day_window(date) else {
            return;
        };
        let band_inner = ring.radius_at(self.layout.event_band);
        for event in events {
            let Some((start, end)) = event.clipped_to(day_start, day_end) else {
                continue;
            };
            let range = SegmentAngleRange::new(
                time_to_angle(hours_between(day_start, start)),
                time_to_angle(hours_between(day_start, end)),
            );
            if range.sweep() <= 0.0 {
                trace!(id = %event.id, "zero-length event has no arc");
                continue;
            }
            let wedge = Wedge {
                center: ring.center,
                outer_radius: ring.outer_radius,
                inner_radius: band_inner,
                range,
            };
            surface.fill_wedge(&wedge, self.palette.event, None);
            let title = TextRun::centered(
                event.title.clone(),
                wedge.centroid(),
                self.fonts.event,
                self.palette.text,
            )
            .rotated(range.mid() + FRAC_PI_2);
            surface.draw_text(&title);
        }
    }

    fn draw_dot<S: DrawSurface + ?Sized>(&self, surface: &mut S, center: Point) {
        let dot = Wedge {
            center,
            outer_radius: self.layout.dot_radius,
            inner_radius: 0.0,
            range: full_turn(),
        };
        surface.fill_wedge(&dot, self.palette.event, None);
    }
}

fn full_turn() -> SegmentAngleRange {
    SegmentAngleRange::new(-FRAC_PI_2, TAU - FRAC_PI_2)
}

/// Fractional hours from `from` to `to`.
fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_seconds() as f64 / 3600.0
}

/// Distinct dates touched by `events` inside `[start, end)`, in order.
fn touched_days(
    events: &[CalendarEvent],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> BTreeSet<NaiveDate> {
    let mut days = BTreeSet::new();
    for event in events {
        let Some((from, to)) = event.clipped_to(start, end) else {
            continue;
        };
        // The end is exclusive: an event ending at midnight does not touch
        // the next day.
        let last = if to > from {
            (to - TimeDelta::nanoseconds(1)).date()
        } else {
            from.date()
        };
        days.extend(from.date().iter_days().take_while(|d| *d <= last));
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCommand, RecordingSurface};
    use infinity_geometry::hit_test;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn event(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> CalendarEvent {
        CalendarEvent::new(id, format!("event {id}"), start, end).unwrap()
    }

    fn surface() -> RecordingSurface {
        RecordingSurface::new(Size::new(400.0, 400.0))
    }

    #[test]
    fn mismatched_view_draws_nothing() {
        let renderer = Renderer::default();
        let mut surface = surface();
        let ring = renderer.ring_for(surface.bounding_size()).unwrap();
        let month = Segment::month(2024, 2).unwrap();
        let err = renderer
            .render(&mut surface, ViewLevel::Day, &month, &ring, None, EventsView::Loading)
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidState { .. }));
        assert!(surface.is_empty());
    }

    #[test]
    fn tiny_surface_is_a_geometry_error() {
        let renderer = Renderer::default();
        let mut surface = RecordingSurface::new(Size::new(15.0, 15.0));
        let snapshot = ViewSnapshot {
            segment: Segment::year(2024).unwrap(),
            hovered: None,
            generation: 0,
        };
        let err = renderer
            .render_snapshot(&mut surface, &snapshot, EventsView::Loading)
            .unwrap_err();
        assert!(matches!(err, RenderError::Geometry(_)));
        assert!(surface.is_empty());
    }

    #[test]
    fn year_ring_has_twelve_segments_and_hover() {
        let renderer = Renderer::default();
        let mut surface = surface();
        let snapshot = ViewSnapshot {
            segment: Segment::year(2024).unwrap(),
            hovered: Some(3),
            generation: 0,
        };
        renderer
            .render_snapshot(&mut surface, &snapshot, EventsView::Loading)
            .unwrap();
        assert_eq!(surface.commands()[0], DrawCommand::Clear);
        let wedges: Vec<_> = surface.wedges().collect();
        // Background plus twelve months.
        assert_eq!(wedges.len(), 13);
        assert_eq!(wedges[0].1, renderer.palette.background);
        assert_eq!(wedges[4].1, renderer.palette.highlight);
        assert_eq!(wedges[5].1, renderer.palette.segment);
        let texts: Vec<_> = surface.texts().collect();
        assert_eq!(texts.first(), Some(&"Jan"));
        assert_eq!(texts.last(), Some(&"2024"));
    }

    #[test]
    fn day_events_are_clipped_to_the_day() {
        let renderer = Renderer::default();
        let mut surface = surface();
        let ring = renderer.ring_for(surface.bounding_size()).unwrap();
        let day = Segment::day_of(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        let events = [
            event("a", at(2024, 3, 5, 6, 0), at(2024, 3, 5, 12, 0)),
            event("b", at(2024, 3, 5, 22, 0), at(2024, 3, 6, 2, 0)),
        ];
        renderer
            .render(&mut surface, ViewLevel::Day, &day, &ring, None, EventsView::Ready(&events))
            .unwrap();

        let arcs: Vec<_> = surface
            .wedges()
            .filter(|(_, fill)| *fill == renderer.palette.event)
            .map(|(w, _)| *w)
            .collect();
        assert_eq!(arcs.len(), 2);
        // 06:00 to 12:00 runs from three o'clock to six o'clock.
        assert!((arcs[0].range.start - 0.0).abs() < 1e-9);
        assert!((arcs[0].range.end - FRAC_PI_2).abs() < 1e-9);
        assert!((arcs[0].inner_radius - ring.radius_at(0.8)).abs() < 1e-9);
        assert!((arcs[0].outer_radius - ring.outer_radius).abs() < 1e-9);
        // The overnight event stops at midnight.
        assert!((arcs[1].range.end - time_to_angle(24.0)).abs() < 1e-9);

        let title = surface
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text(run) if run.text == "event a" => Some(run.clone()),
                _ => None,
            })
            .unwrap();
        assert!((title.rotation - (FRAC_PI_2 / 2.0 + FRAC_PI_2)).abs() < 1e-9);
    }

    #[test]
    fn zero_length_event_has_no_arc() {
        let renderer = Renderer::default();
        let mut surface = surface();
        let ring = renderer.ring_for(surface.bounding_size()).unwrap();
        let day = Segment::day_of(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        let events = [event("z", at(2024, 3, 5, 9, 0), at(2024, 3, 5, 9, 0))];
        renderer
            .render(&mut surface, ViewLevel::Day, &day, &ring, None, EventsView::Ready(&events))
            .unwrap();
        assert!(surface.wedges().all(|(_, fill)| fill != renderer.palette.event));
    }

    #[test]
    fn month_view_marks_each_touched_day_once() {
        let renderer = Renderer::default();
        let mut surface = surface();
        let ring = renderer.ring_for(surface.bounding_size()).unwrap();
        let month = Segment::month(2024, 2).unwrap();
        let events = [
            event("a", at(2024, 3, 5, 9, 0), at(2024, 3, 5, 10, 0)),
            event("b", at(2024, 3, 5, 11, 0), at(2024, 3, 5, 12, 0)),
            // Ends at midnight: touches only the 6th.
            event("c", at(2024, 3, 6, 20, 0), at(2024, 3, 7, 0, 0)),
            // Starts in February: clipped to the 1st.
            event("d", at(2024, 2, 29, 20, 0), at(2024, 3, 1, 1, 0)),
        ];
        renderer
            .render(&mut surface, ViewLevel::Month, &month, &ring, None, EventsView::Ready(&events))
            .unwrap();
        let dots: Vec<_> = surface
            .wedges()
            .filter(|(w, fill)| *fill == renderer.palette.event && w.inner_radius == 0.0)
            .map(|(w, _)| *w)
            .collect();
        assert_eq!(dots.len(), 3);
        let first = polar_point(ring.center, ring.mid_radius(), angle_range_for(0, 31).mid());
        assert!((dots[0].center - first).hypot() < 1e-9);
        assert_eq!(dots[0].outer_radius, renderer.layout.dot_radius);
    }

    #[test]
    fn year_view_places_dots_within_the_month() {
        let renderer = Renderer::default();
        let mut surface = surface();
        let ring = renderer.ring_for(surface.bounding_size()).unwrap();
        let year = Segment::year(2024).unwrap();
        let events = [
            event("jan", at(2024, 1, 31, 9, 0), at(2024, 1, 31, 10, 0)),
            event("feb", at(2024, 2, 29, 9, 0), at(2024, 2, 29, 10, 0)),
            event("mar", at(2024, 3, 31, 9, 0), at(2024, 3, 31, 10, 0)),
            event("dec", at(2024, 12, 31, 9, 0), at(2024, 12, 31, 10, 0)),
        ];
        renderer
            .render(&mut surface, ViewLevel::Year, &year, &ring, None, EventsView::Ready(&events))
            .unwrap();
        let months: Vec<_> = surface
            .wedges()
            .filter(|(w, fill)| *fill == renderer.palette.event && w.inner_radius == 0.0)
            .map(|(w, _)| hit_test(w.center, &ring, 12))
            .collect();
        assert_eq!(months, [Some(0), Some(1), Some(2), Some(11)]);

        // Day 31 of 31 sits half a day's share before the end of January.
        let january = angle_range_for(0, 12);
        let expected = polar_point(
            ring.center,
            ring.mid_radius(),
            january.start + 30.5 / 31.0 * january.sweep(),
        );
        let first = surface
            .wedges()
            .find(|(w, fill)| *fill == renderer.palette.event && w.inner_radius == 0.0)
            .map(|(w, _)| w.center)
            .unwrap();
        assert!((first - expected).hypot() < 1e-9);
    }

    #[test]
    fn failed_events_draw_a_notice() {
        let renderer = Renderer::default();
        let mut surface = surface();
        let ring = renderer.ring_for(surface.bounding_size()).unwrap();
        let day = Segment::day_of(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        renderer
            .render(&mut surface, ViewLevel::Day, &day, &ring, None, EventsView::Failed)
            .unwrap();
        assert!(surface.texts().any(|t| t == EVENTS_UNAVAILABLE));

        renderer
            .render(&mut surface, ViewLevel::Day, &day, &ring, None, EventsView::Loading)
            .unwrap();
        assert!(!surface.texts().any(|t| t == EVENTS_UNAVAILABLE));
    }

    #[test]
    fn hour_ring_labels_every_fifth_minute() {
        let renderer = Renderer::default();
        let mut surface = surface();
        let ring = renderer.ring_for(surface.bounding_size()).unwrap();
        let hour = Segment::hour_of(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), 14).unwrap();
        renderer
            .render(&mut surface, ViewLevel::Hour, &hour, &ring, None, EventsView::Loading)
            .unwrap();
        // 60 segments plus the background.
        assert_eq!(surface.wedges().count(), 61);
        // Twelve minute labels plus the centre line.
        assert_eq!(surface.texts().count(), 13);
    }
}
