//! Benchmarks for dial geometry

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ah_core::{ScalingPolicy, WallClockSample};
use ah_dial::Dial;

fn bench_sector_path(c: &mut Criterion) {
    let dial = Dial::default();
    let descriptor = ScalingPolicy::variable(720).sector(WallClockSample::from_ms_of_day(64_800_000));

    c.bench_function("sector_svg_path", |b| {
        b.iter(|| black_box(dial.ah_sector(black_box(&descriptor)).to_svg_path()))
    });
}

fn bench_overflow_sector(c: &mut Criterion) {
    let dial = Dial::default();

    c.bench_function("sector_overflow", |b| {
        b.iter(|| black_box(dial.sector(0.0, black_box(450.0)).overflow_ray()))
    });
}

fn bench_ticks(c: &mut Criterion) {
    let dial = Dial::default();

    c.bench_function("dial_ticks_and_labels", |b| {
        b.iter(|| {
            let ticks = dial.ticks();
            let labels = dial.hour_labels();
            black_box((ticks, labels))
        })
    });
}

criterion_group!(benches, bench_sector_path, bench_overflow_sector, bench_ticks);

criterion_main!(benches);
