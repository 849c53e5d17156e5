// Benchmark for month grid generation and slider snapping
// Measures the work done each time a picker changes month or the ruler moves

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use picker_modals::models::calendar::TrailingWeek;
use picker_modals::models::time_step::TimeStep;
use picker_modals::services::calendar_grid::build_calendar_grid_with;
use picker_modals::services::snap::snap_target;
use picker_modals::services::time_index::snap_points;

fn bench_calendar_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar_grid");

    for trailing in [TrailingWeek::Omit, TrailingWeek::Pad] {
        group.bench_with_input(
            BenchmarkId::new("year_of_months", format!("{trailing:?}")),
            &trailing,
            |b, &trailing| {
                b.iter(|| {
                    for month in 1..=12 {
                        let focused = NaiveDate::from_ymd_opt(2024, month, 1).unwrap();
                        black_box(build_calendar_grid_with(black_box(focused), trailing));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap");

    for step in [TimeStep::One, TimeStep::Five, TimeStep::Sixty] {
        let points = snap_points(step, 9.0, 400.0);
        group.bench_with_input(BenchmarkId::new("snap_target", step), &points, |b, points| {
            b.iter(|| snap_target(black_box(-3210.0), black_box(-420.0), points, 150.0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calendar_grid, bench_snap);
criterion_main!(benches);
