// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{Days, NaiveDate, TimeDelta};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use infinity_events::{CalendarEvent, EventStore, InMemoryEventStore};

/// `per_day` back-to-back 45 minute events on every day of 2024.
fn store_for(per_day: u32) -> InMemoryEventStore {
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut events = Vec::new();
    for day in 0..366 {
        let date = first + Days::new(day);
        for slot in 0..per_day {
            let start = date.and_hms_opt(8, 0, 0).unwrap()
                + TimeDelta::minutes(45 * i64::from(slot));
            let event = CalendarEvent::new(
                format!("{day}-{slot}"),
                "Slot",
                start,
                start + TimeDelta::minutes(45),
            )
            .unwrap();
            events.push(event);
        }
    }
    InMemoryEventStore::with_events(events).unwrap()
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("events/query");
    for per_day in [1_u32, 8, 16] {
        let store = store_for(per_day);
        group.bench_with_input(BenchmarkId::new("day", per_day), &store, |b, store| {
            let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
            b.iter(|| pollster::block_on(store.events_for_date(black_box(date))).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("month", per_day), &store, |b, store| {
            b.iter(|| pollster::block_on(store.events_for_month(2024, black_box(2))).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("year", per_day), &store, |b, store| {
            b.iter(|| pollster::block_on(store.events_for_year(black_box(2024))).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
