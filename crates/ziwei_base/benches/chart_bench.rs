use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_base::{
    Branch, CalendarFact, Sex, Stem, annual_fortune, apply_transformations, build, daily_fortune,
    major_limits, monthly_fortune, rotate,
};

fn reference() -> CalendarFact {
    CalendarFact::new("庚午", 7, 15, 14, 30)
}

fn build_bench(c: &mut Criterion) {
    let fact = reference();

    let mut group = c.benchmark_group("build");
    group.bench_function("natal_ring", |b| {
        b.iter(|| build(black_box(&fact), Sex::Female))
    });
    group.finish();
}

fn overlay_bench(c: &mut Criterion) {
    let ring = build(&reference(), Sex::Female).expect("reference chart should build");

    let mut group = c.benchmark_group("overlay");
    group.bench_function("rotate", |b| {
        b.iter(|| rotate(black_box(&ring), black_box(Branch::Shen)))
    });
    group.bench_function("apply_transformations", |b| {
        b.iter_batched(
            || ring.clone(),
            |mut r| apply_transformations(&mut r, black_box(Stem::Ren)),
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn projection_bench(c: &mut Criterion) {
    let ring = build(&reference(), Sex::Female).expect("reference chart should build");

    let mut group = c.benchmark_group("projection");
    group.bench_function("major_limits", |b| {
        b.iter(|| major_limits(black_box(&ring), Stem::Geng, Sex::Female))
    });
    group.bench_function("annual_monthly_daily", |b| {
        b.iter(|| {
            let annual = annual_fortune(&ring, black_box(2025));
            let monthly = monthly_fortune(&ring, &annual, black_box(6));
            monthly.and_then(|m| daily_fortune(&ring, &annual, &m, black_box(18)))
        })
    });
    group.finish();
}

criterion_group!(benches, build_bench, overlay_bench, projection_bench);
criterion_main!(benches);
