// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use infinity_geometry::{RingGeometry, hit_test};
use kurbo::{Point, Size};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

fn points(n: usize, side: f64, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| Point::new(rng.next_unit() * side, rng.next_unit() * side))
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let side = 800.0;
    let ring = RingGeometry::from_size(
        Size::new(side, side),
        RingGeometry::DEFAULT_INNER_RATIO,
        RingGeometry::DEFAULT_MARGIN,
    )
    .unwrap();
    let pts = points(4_096, side, 0x1f2e_3d4c);

    let mut group = c.benchmark_group("geometry/hit_test");
    group.throughput(Throughput::Elements(pts.len() as u64));
    // Segment counts of the year, month, week, day, and hour rings.
    for count in [12_u32, 31, 7, 24, 60] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut hits = 0_u32;
                for p in &pts {
                    if hit_test(black_box(*p), &ring, count).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test);
criterion_main!(benches);
