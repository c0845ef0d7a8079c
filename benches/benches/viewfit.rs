// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_viewfit` and region lookup in `understory_viewsync`.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_viewfit::{
    Extents3, OffsetSession, Point3, Vec3, ViewState, ViewportView, fit_to_extents, fit_to_points,
};
use understory_viewsync::{EntityId, PolylineEntity, RegionMarker, XDataValue, find_region};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn point(&mut self, span: f64) -> Point3 {
        Point3::new(
            self.next_f64() * span,
            self.next_f64() * span,
            self.next_f64() * span * 0.1,
        )
    }
}

fn oblique_viewport() -> ViewportView {
    ViewportView {
        view_direction: Vec3::new(1.0, -1.0, 1.0),
        view_target: Point3::new(500.0, 500.0, 0.0),
        twist_angle: 0.3,
        ..ViewportView::top_down(420.0, 297.0)
    }
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewfit/fit_to_extents");
    let extents = Extents3::new(Point3::new(-50.0, 10.0, 0.0), Point3::new(950.0, 610.0, 40.0));

    let top_down = ViewportView::top_down(420.0, 297.0);
    group.bench_function("top_down", |b| {
        b.iter(|| fit_to_extents(black_box(&extents), black_box(&top_down)));
    });

    let oblique = oblique_viewport();
    group.bench_function("oblique_twisted", |b| {
        b.iter(|| fit_to_extents(black_box(&extents), black_box(&oblique)));
    });
    group.finish();
}

fn bench_fit_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewfit/fit_to_points");
    let viewport = oblique_viewport();
    for len in [8usize, 256, 4_096] {
        let mut rng = Lcg::new(0x5eed);
        let points: Vec<Point3> = (0..len).map(|_| rng.point(1_000.0)).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &points, |b, points| {
            b.iter(|| fit_to_points(points.iter().copied(), black_box(&viewport)));
        });
    }
    group.finish();
}

fn bench_offset_session(c: &mut Criterion) {
    let mut rng = Lcg::new(7);
    let views: Vec<ViewState> = (0..1_024)
        .map(|_| {
            ViewState::new(
                Point::new(rng.next_f64() * 100.0, rng.next_f64() * 100.0),
                400.0,
                300.0,
            )
        })
        .collect();
    c.bench_function("viewfit/offset_session_observe_1024", |b| {
        b.iter(|| {
            let mut session = OffsetSession::new();
            for view in &views {
                session.observe(*view);
            }
            black_box(session.synchronize(&views[0]))
        });
    });
}

fn bench_find_region(c: &mut Criterion) {
    let marker = RegionMarker::new("TNP_SYNC_REGION");
    let other = vec![
        XDataValue::AppName("OTHER_APP".into()),
        XDataValue::Int16(1),
    ];
    let mut rng = Lcg::new(42);
    let mut polylines: Vec<PolylineEntity> = (0..2_000u64)
        .map(|id| PolylineEntity {
            id: EntityId(id),
            vertices: (0..16).map(|_| rng.point(1_000.0)).collect(),
            closed: id % 2 == 0,
            xdata: other.clone(),
        })
        .collect();
    // Marked region sits at the end so the whole list is scanned.
    if let Some(last) = polylines.last_mut() {
        last.closed = true;
        last.xdata = marker.encode();
    }
    c.bench_function("viewsync/find_region_2000", |b| {
        b.iter(|| find_region(black_box(&polylines), &marker));
    });
}

criterion_group!(
    benches,
    bench_fit,
    bench_fit_points,
    bench_offset_session,
    bench_find_region
);
criterion_main!(benches);
