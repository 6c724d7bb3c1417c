// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame cost per zoom level on the recording, SVG, and raster surfaces.

use chrono::{NaiveDate, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use infinity_events::CalendarEvent;
use infinity_render::{EventsView, RecordingSurface, Renderer};
use infinity_render_svg::SvgSurface;
use infinity_render_vello_cpu::VelloCpuSurface;
use infinity_view::{Segment, ViewSnapshot};
use kurbo::Size;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Five one-hour events a day through March 2024.
fn march_events() -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    for day in 1..=31 {
        for hour in (8..18).step_by(2) {
            let id = format!("{day}-{hour}");
            events.push(
                CalendarEvent::new(id, "Slot", at(day, hour), at(day, hour + 1)).unwrap(),
            );
        }
    }
    events
}

fn snapshots() -> Vec<(&'static str, ViewSnapshot)> {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    [
        ("year", Segment::year(2024).unwrap()),
        ("month", Segment::month_of(date)),
        ("week", Segment::week_of(date)),
        ("day", Segment::day_of(date)),
        ("hour", Segment::hour_of(date, 9).unwrap()),
    ]
    .into_iter()
    .map(|(name, segment)| {
        (
            name,
            ViewSnapshot {
                segment,
                hovered: Some(2),
                generation: 0,
            },
        )
    })
    .collect()
}

fn bench_render(c: &mut Criterion) {
    let renderer = Renderer::default();
    let events = march_events();
    let size = Size::new(600.0, 600.0);

    let mut group = c.benchmark_group("render/recording");
    for (name, snapshot) in snapshots() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &snapshot, |b, snap| {
            let mut surface = RecordingSurface::new(size);
            b.iter(|| {
                renderer
                    .render_snapshot(&mut surface, snap, EventsView::Ready(&events))
                    .unwrap();
                black_box(surface.commands().len())
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render/svg");
    for (name, snapshot) in snapshots() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &snapshot, |b, snap| {
            let mut surface = SvgSurface::new(size);
            b.iter(|| {
                renderer
                    .render_snapshot(&mut surface, snap, EventsView::Ready(&events))
                    .unwrap();
                black_box(surface.to_svg().len())
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render/vello_cpu");
    group.sample_size(20);
    for (name, snapshot) in snapshots() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &snapshot, |b, snap| {
            let mut surface = VelloCpuSurface::new(600, 600);
            b.iter(|| {
                renderer
                    .render_snapshot(&mut surface, snap, EventsView::Ready(&events))
                    .unwrap();
                black_box(surface.render_to_rgba().len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
